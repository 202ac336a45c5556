use crate::view::state::{Effect, Transition, ViewEvent, ViewState, reduce};
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::sync::watch;
use tokio::sync::watch::{Receiver as WatchReceiver, Sender as WatchSender};
use tracing::{debug, info, instrument, warn};

/// Owns the state of one page and applies events to it in arrival order.
#[derive(Debug)]
pub struct ViewStore {
    state: ViewState,
    rx: Receiver<ViewEvent>,
    effects_tx: Sender<Effect>,
    notifier_tx: WatchSender<ViewState>,
    notifier_rx: WatchReceiver<ViewState>,
}

impl ViewStore {
    pub fn new(state: ViewState, rx: Receiver<ViewEvent>, effects_tx: Sender<Effect>) -> Self {
        let (notifier_tx, notifier_rx) = watch::channel(state.clone());

        ViewStore {
            state,
            rx,
            effects_tx,
            notifier_tx,
            notifier_rx,
        }
    }

    pub fn notifier(&self) -> WatchReceiver<ViewState> {
        self.notifier_rx.clone()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[instrument(skip(self), fields(page = ?self.state.page))]
    pub async fn listen(&mut self) {
        while let Some(event) = self.rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            let Transition { state, effects } = reduce(&self.state, event);

            if state == self.state {
                debug!("🔵 Event did not change the view");
            } else {
                self.state = state;
                self.notifier_tx.send(self.state.clone()).unwrap_or_default();
            }

            for effect in effects {
                log_effect(&effect);
                if self.effects_tx.send(effect).await.is_err() {
                    warn!("⚠️ Nobody is listening for view effects anymore");
                }
            }
        }
        info!("🔵 Event channel closed, stopping view store");
    }
}

fn log_effect(effect: &Effect) {
    match effect {
        Effect::ScrollToCard(id) => debug!(location_id = id, "🟢 Scroll to card {}", id),
        Effect::FocusMarker(id) => debug!(location_id = id, "🟢 Focus marker {}", id),
        Effect::Notify(notice) => info!("💬 {}", notice),
    }
}

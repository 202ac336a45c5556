use aurora::app_config::AppConfig;
use aurora::catalog::{Catalog, RequestBoard};
use aurora::domain::BloodTypeFilter;
use aurora::geolocation::{FixedGeolocation, GeolocationProvider, UnavailableGeolocation, resolve_user_location};
use aurora::view::{Effect, Page, ViewEvent, ViewState, ViewStore, results_listener};
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{debug, info, instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🩸 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let catalog = Arc::new(Catalog::embedded()?);
    info!("✅  Loaded catalog");

    let provider: Box<dyn GeolocationProvider> = match config.geolocation().position() {
        Some(position) => Box::new(FixedGeolocation::new(position)),
        None => Box::new(UnavailableGeolocation),
    };

    for page in [Page::Nearby, Page::Banks] {
        run_page(page, &config, catalog.clone(), provider.as_ref()).await?;
    }

    let board = RequestBoard::embedded()?;
    for request in board.filter(BloodTypeFilter::All) {
        info!(
            request_id = request.id,
            "🆘 {} needs {} unit(s) of {} at {}, {:?} urgency, {:?}",
            request.patient_name,
            request.units_needed,
            request.blood_type,
            request.hospital,
            request.urgency,
            request.status
        );
    }

    info!("🔥 {} is done", env!("CARGO_PKG_NAME"));
    Ok(())
}

#[instrument(skip(config, catalog, provider))]
async fn run_page(page: Page, config: &AppConfig, catalog: Arc<Catalog>, provider: &dyn GeolocationProvider) -> Result<(), Box<dyn Error>> {
    let buffer_size = config.view().event_buffer_size();
    let (tx, rx) = mpsc::channel::<ViewEvent>(buffer_size);
    let (effects_tx, mut effects_rx) = mpsc::channel::<Effect>(buffer_size);

    let mut store = ViewStore::new(ViewState::new(page, config.search()), rx, effects_tx);
    let listener = task::spawn(results_listener(store.notifier(), catalog, config.geolocation().fallback()));
    let effects = task::spawn(async move {
        while let Some(effect) = effects_rx.recv().await {
            debug!("Applied effect {:?}", effect);
        }
    });
    let store = task::spawn(async move {
        store.listen().await;
    });
    info!("✅  Initialized {:?} page", page);

    let resolved = resolve_user_location(provider, config.geolocation()).await;
    tx.send(ViewEvent::LocationResolved(resolved)).await?;
    drop(tx);

    store.await?;
    let renders = listener.await?;
    effects.await?;

    info!("✅  Rendered {:?} page {} time(s)", page, renders);
    Ok(())
}

use crate::catalog::Catalog;
use crate::domain::{GeoLocation, Location};
use crate::geolocation::ResolvedLocation;
use crate::search::SearchHit;
use crate::view::map::{MapScene, project};
use crate::view::render::{render, user_location};
use crate::view::state::{Tab, ViewState};
use std::sync::Arc;
use tokio::sync::watch::Receiver;
use tracing::{info, instrument};

/// Re-renders the page every time the view state changes, returns the number of renders.
#[instrument(skip_all)]
pub async fn results_listener(mut rx: Receiver<ViewState>, catalog: Arc<Catalog>, default_center: GeoLocation) -> usize {
    let mut renders = 0;
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();
        let scene = render_page(&catalog, &state, default_center);
        info!(
            "🗺️ Map shows {} marker(s), selected: {:?}",
            scene.markers.len(),
            scene.selected_marker().map(|marker| marker.id)
        );
        if scene.using_default_location {
            info!("📍 Distances are measured from the default location");
        }
        renders += 1;
    }
    renders
}

/// Logs the lists of the page and returns the map scene of the active tab.
pub fn render_page(catalog: &Catalog, state: &ViewState, default_center: GeoLocation) -> MapScene {
    let results = render(catalog, state);
    let user = user_location(state);

    let scene = match state.tab {
        Tab::Banks => {
            log_hits("🩸 Blood banks", &results.blood_banks);
            log_hits("⛺ Donation camps", &results.donation_camps);
            project(&results.blood_banks, user, state.selected, default_center)
        }
        Tab::Camps => {
            log_hits("⛺ Donation camps", &results.donation_camps);
            project(&results.donation_camps, user, state.selected, default_center)
        }
    };

    MapScene {
        using_default_location: state.user_location.as_ref().is_some_and(ResolvedLocation::is_fallback),
        ..scene
    }
}

fn log_hits<T: Location>(title: &str, hits: &[SearchHit<T>]) {
    info!("{}: {} result(s)", title, hits.len());
    for hit in hits {
        match hit.distance {
            Some(distance) => info!(location_id = hit.location.id(), "  {} ({} mi)", hit.location.name(), distance),
            None => info!(location_id = hit.location.id(), "  {}", hit.location.name()),
        }
    }
}

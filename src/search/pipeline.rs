use crate::domain::{GeoLocation, Location};
use crate::search::filter::passes;
use crate::search::filter_state::FilterState;
use crate::search::hit::SearchHit;
use crate::search::sort::sort_hits;
use tracing::{debug, instrument};

/// Annotates, filters and sorts the given records. The records themselves are only borrowed.
#[instrument(skip_all, fields(search_term = %filter.search_term, sort_key = ?filter.sort_key))]
pub fn search<'a, T: Location>(locations: &'a [T], filter: &FilterState, user_location: Option<&GeoLocation>) -> Vec<SearchHit<'a, T>> {
    let mut hits = locations
        .iter()
        .map(|location| SearchHit::annotate(location, user_location))
        .filter(|hit| passes(hit, filter))
        .collect::<Vec<_>>();

    sort_hits(&mut hits, filter.sort_key);

    debug!("🔎 {} of {} location(s) match", hits.len(), locations.len());
    hits
}

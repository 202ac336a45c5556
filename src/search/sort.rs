use crate::domain::Location;
use crate::search::filter_state::SortKey;
use crate::search::hit::SearchHit;
use std::cmp::Ordering;

/// Stable sort, hits that compare equal keep their catalog order.
pub fn sort_hits<T: Location>(hits: &mut [SearchHit<T>], sort_key: SortKey) {
    match sort_key {
        SortKey::Distance => hits.sort_by(|a, b| missing_last(a.distance, b.distance)),
        SortKey::Name => hits.sort_by(|a, b| compare_names(a.location.name(), b.location.name())),
        SortKey::Date => hits.sort_by(|a, b| missing_last(a.location.date(), b.location.date())),
    }
}

/// Case-insensitive first, so "apple" sorts before "Banana". Names that only differ in case
/// put lowercase first, the way an English locale collates them.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

fn missing_last<K: Ord>(a: Option<K>, b: Option<K>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

mod filter;
mod filter_state;
mod hit;
mod pipeline;
mod sort;

pub use filter_state::{DEFAULT_RADIUS_MILES, FilterState, InvalidSortKey, MAX_RADIUS_MILES, Radius, SortKey};
pub use hit::SearchHit;
pub use pipeline::search;
pub use sort::compare_names;

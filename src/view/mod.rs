mod listener;
pub mod map;
mod render;
mod state;
mod store;

pub use listener::{render_page, results_listener};
pub use render::{PageResults, render, user_location};
pub use state::{Effect, Page, Tab, Transition, ViewEvent, ViewMode, ViewState, reduce};
pub use store::ViewStore;

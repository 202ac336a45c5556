mod blood_type_deserializer;
mod date_deserializer;
mod loader;
mod request_board;
mod request_deserializer;
mod serialized;

pub use loader::{Catalog, CatalogError};
pub use request_board::RequestBoard;

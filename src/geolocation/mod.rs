mod provider;
mod resolve;

pub use provider::{FixedGeolocation, GeolocationError, GeolocationProvider, UnavailableGeolocation};
pub use resolve::{LocationSource, ResolvedLocation, resolve_user_location};

use crate::domain::GeoLocation;
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// The device's location service, asked once per page visit.
#[async_trait]
pub trait GeolocationProvider: Debug + Send + Sync {
    async fn current_position(&self) -> Result<GeoLocation, GeolocationError>;
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GeolocationError {
    #[error("user denied the geolocation request")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
    #[error("geolocation request timed out")]
    Timeout,
    #[error("geolocation is not supported")]
    Unsupported,
}

/// Always reports the same position.
#[derive(Debug, Clone)]
pub struct FixedGeolocation {
    position: GeoLocation,
}

impl FixedGeolocation {
    pub fn new(position: GeoLocation) -> Self {
        FixedGeolocation { position }
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocation {
    async fn current_position(&self) -> Result<GeoLocation, GeolocationError> {
        Ok(self.position)
    }
}

/// A device without a location service.
#[derive(Debug, Clone, Default)]
pub struct UnavailableGeolocation;

#[async_trait]
impl GeolocationProvider for UnavailableGeolocation {
    async fn current_position(&self) -> Result<GeoLocation, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}

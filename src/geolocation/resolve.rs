use crate::app_config::Geolocation as GeolocationConfig;
use crate::domain::{GeoLocation, Notice};
use crate::geolocation::provider::{GeolocationError, GeolocationProvider};
use tokio::time::timeout;
use tracing::{info, instrument, warn};

#[derive(PartialEq, Debug, Clone)]
pub enum LocationSource {
    Detected,
    Fallback(GeolocationError),
}

/// The coordinate searches are made from, always present once resolution settles.
#[derive(PartialEq, Debug, Clone)]
pub struct ResolvedLocation {
    pub location: GeoLocation,
    pub source: LocationSource,
}

impl ResolvedLocation {
    pub fn detected(location: GeoLocation) -> Self {
        ResolvedLocation {
            location,
            source: LocationSource::Detected,
        }
    }

    pub fn fallback(location: GeoLocation, reason: GeolocationError) -> Self {
        ResolvedLocation {
            location,
            source: LocationSource::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, LocationSource::Fallback(_))
    }

    /// The message shown once the location is known.
    pub fn notice(&self) -> Notice {
        match &self.source {
            LocationSource::Detected => Notice::info(
                "Location Found",
                "Using your current location to find nearby blood banks and donation camps.",
            ),
            LocationSource::Fallback(GeolocationError::Unsupported) => Notice::info(
                "Location Services Unavailable",
                "Geolocation is not available. Using a default location instead.",
            ),
            LocationSource::Fallback(_) => Notice::info(
                "Using Default Location",
                "Unable to access your location. Using a default location instead. You can still explore locations on the map.",
            ),
        }
    }
}

/// Asks the provider for the current position and falls back to the configured coordinate
/// when it fails or does not answer in time. Never fails itself.
#[instrument(skip_all)]
pub async fn resolve_user_location(provider: &dyn GeolocationProvider, config: &GeolocationConfig) -> ResolvedLocation {
    info!("📍 Resolving user location...");

    let result = match timeout(config.timeout(), provider.current_position()).await {
        Ok(result) => result,
        Err(_) => Err(GeolocationError::Timeout),
    };

    match result {
        Ok(location) => {
            info!("📍 Resolving user location... OK, {}, {}", location.latitude, location.longitude);
            ResolvedLocation::detected(location)
        }
        Err(err) => {
            let fallback = config.fallback();
            #[rustfmt::skip]
            warn!("⚠️ Could not resolve user location: {}, using {}, {}", err, fallback.latitude, fallback.longitude);
            ResolvedLocation::fallback(fallback, err)
        }
    }
}

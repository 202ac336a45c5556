use crate::domain::GeoLocation;
use crate::search::{Radius, SortKey};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    geolocation: Geolocation,
    search: Search,
    view: View,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("AURORA").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn geolocation(&self) -> &Geolocation {
        &self.geolocation
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn view(&self) -> &View {
        &self.view
    }
}

#[derive(Debug, Deserialize)]
pub struct Geolocation {
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    fallback: GeoLocation,
    position: Option<GeoLocation>,
}

impl Geolocation {
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn fallback(&self) -> GeoLocation {
        self.fallback
    }

    pub fn position(&self) -> Option<GeoLocation> {
        self.position
    }
}

#[derive(Debug, Deserialize)]
pub struct Search {
    default_radius_miles: f64,
    max_radius_miles: f64,
    sort_key: SortKey,
}

impl Search {
    pub fn default_radius(&self) -> Radius {
        Radius::capped(self.default_radius_miles, self.max_radius_miles)
    }

    pub fn max_radius_miles(&self) -> f64 {
        self.max_radius_miles
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }
}

#[derive(Debug, Deserialize)]
pub struct View {
    event_buffer_size: usize,
}

impl View {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                geolocation: Geolocation {
                    timeout: Duration::from_secs(10),
                    fallback: GeoLocation::new(40.7128, -74.006),
                    position: None,
                },
                search: Search {
                    default_radius_miles: 10.0,
                    max_radius_miles: 50.0,
                    sort_key: SortKey::Distance,
                },
                view: View { event_buffer_size: 4 },
            },
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.geolocation.timeout = timeout;
        self
    }

    pub fn default_radius_miles(mut self, miles: f64) -> Self {
        self.config.search.default_radius_miles = miles;
        self
    }

    pub fn max_radius_miles(mut self, miles: f64) -> Self {
        self.config.search.max_radius_miles = miles;
        self
    }

    pub fn sort_key(mut self, sort_key: SortKey) -> Self {
        self.config.search.sort_key = sort_key;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    fn from_toml(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn parses_the_shipped_configuration() -> Result<(), ConfigError> {
        let config = from_toml(include_str!("../config.toml"))?;

        assert_eq!(config.geolocation().timeout(), Duration::from_secs(10));
        assert_eq!(config.geolocation().fallback(), GeoLocation::new(40.7128, -74.006));
        assert_eq!(config.geolocation().position(), Some(GeoLocation::new(40.7158, -73.997)));
        assert_eq!(config.search().default_radius().miles(), 10.0);
        assert_eq!(config.search().max_radius_miles(), 50.0);
        assert_eq!(config.search().sort_key(), SortKey::Distance);
        assert_eq!(config.view().event_buffer_size(), 16);

        Ok(())
    }

    #[test]
    fn clamps_an_oversized_default_radius() -> Result<(), ConfigError> {
        let config = from_toml(
            r#"
            [geolocation]
            timeout = "500ms"
            fallback = { latitude = 0.0, longitude = 0.0 }

            [search]
            default_radius_miles = 120.0
            max_radius_miles = 30.0
            sort_key = "name"

            [view]
            event_buffer_size = 1
            "#,
        )?;

        assert_eq!(config.geolocation().timeout(), Duration::from_millis(500));
        assert_eq!(config.geolocation().position(), None);
        assert_eq!(config.search().default_radius().miles(), 30.0);
        assert_eq!(config.search().sort_key(), SortKey::Name);

        Ok(())
    }

    #[test]
    fn rejects_an_invalid_fallback() {
        let result = from_toml(
            r#"
            [geolocation]
            timeout = "10s"
            fallback = { latitude = 95.0, longitude = 0.0 }

            [search]
            default_radius_miles = 10.0
            max_radius_miles = 50.0
            sort_key = "distance"

            [view]
            event_buffer_size = 1
            "#,
        );

        assert!(result.is_err());
    }
}

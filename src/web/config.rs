use serde::Deserialize;
use thiserror::Error;

use crate::geo::{GeoPoint3D, EARTH_MEAN_RADIUS_KM};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub geo: GeoConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoConfig {
    #[serde(default = "default_radius")]
    pub earth_radius_km: f64,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: default_radius(),
        }
    }
}

fn default_radius() -> f64 {
    EARTH_MEAN_RADIUS_KM
}

/// Fixed point searched by `/api/proximity/reference`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    #[serde(default)]
    pub altitude_km: f64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            longitude_deg: -160.2,
            latitude_deg: 23.5,
            altitude_km: 0.0,
        }
    }
}

impl ReferenceConfig {
    pub fn point(&self) -> GeoPoint3D {
        GeoPoint3D::new(self.longitude_deg, self.latitude_deg, self.altitude_km)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_station_page_url")]
    pub station_page_url: String,
    #[serde(default = "default_station")]
    pub default_station: String,
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            station_page_url: default_station_page_url(),
            default_station: default_station(),
            feed_url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_station_page_url() -> String {
    "https://www.ndbc.noaa.gov/station_page.php".to_string()
}

fn default_station() -> String {
    "51101".to_string()
}

fn default_feed_url() -> String {
    "https://a.windbornesystems.com/treasure/00.json".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.geo.earth_radius_km.is_finite() && self.geo.earth_radius_km > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "geo.earth_radius_km must be positive, got {}",
                self.geo.earth_radius_km
            )));
        }
        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Invalid("upstream.timeout_secs must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_str("{}").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.geo.earth_radius_km, 6371.0);
        assert_eq!(config.reference.point(), GeoPoint3D::new(-160.2, 23.5, 0.0));
        assert_eq!(config.upstream.default_station, "51101");
        assert_eq!(config.upstream.timeout_secs, 10);
    }

    #[test]
    fn overrides() {
        let yaml = r#"
web:
  bind: "127.0.0.1:9000"
geo:
  earth_radius_km: 1737.4
reference:
  longitude_deg: 10.0
  latitude_deg: -5.0
upstream:
  default_station: "46026"
  feed_url: "http://localhost:1234/feed.json"
"#;
        let config = Config::from_str(yaml).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert_eq!(config.geo.earth_radius_km, 1737.4);
        assert_eq!(config.reference.point(), GeoPoint3D::new(10.0, -5.0, 0.0));
        assert_eq!(config.upstream.default_station, "46026");
        assert_eq!(config.upstream.feed_url, "http://localhost:1234/feed.json");
        assert_eq!(
            config.upstream.station_page_url,
            "https://www.ndbc.noaa.gov/station_page.php"
        );
    }

    #[test]
    fn rejects_bad_radius() {
        let err = Config::from_str("geo:\n  earth_radius_km: -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_yaml() {
        let err = Config::from_str("web: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }
}

mod error;
mod feed;
mod station;

pub use error::UpstreamError;
pub use feed::parse_feed;

use std::time::Duration;

use serde_json::Value;

use crate::geo::GeoPoint3D;
use crate::web::config::UpstreamConfig;

/// Fetches the reference station and the candidate feed. Both carry the configured timeout.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    station_page_url: String,
    feed_url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            station_page_url: config.station_page_url.clone(),
            feed_url: config.feed_url.clone(),
        })
    }

    pub async fn station(&self, station_id: &str) -> Result<GeoPoint3D, UpstreamError> {
        station::fetch_station(&self.http, &self.station_page_url, station_id).await
    }

    pub async fn feed(&self) -> Result<Vec<Value>, UpstreamError> {
        feed::fetch_feed(&self.http, &self.feed_url).await
    }
}

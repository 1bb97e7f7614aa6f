use super::types::{Coordinates, ForecastResponse};
use crate::config::Config;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetNoError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("API error: {0}")]
    ApiError(String),
}

pub struct MetNoClient {
    client: Client,
    config: Config,
}

impl MetNoClient {
    pub fn new(config: Config) -> Self {
        // met.no rejects requests without an identifying User-Agent.
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// One best-effort GET against the locationforecast compact feed.
    /// Coordinates are formatted to two decimals, as the feed's cache layer
    /// expects.
    pub async fn fetch_compact(
        &self,
        coordinates: Coordinates,
    ) -> Result<ForecastResponse, MetNoError> {
        let url = format!(
            "{}{}?lat={:.2}&lon={:.2}",
            self.config.met_base_url, self.config.met_compact_path, coordinates.lat, coordinates.lon
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(MetNoError::ApiError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        Ok(response.json().await?)
    }
}

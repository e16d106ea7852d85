use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::{EndpointConfig, ForecastKind},
    error::ForecastError,
    model::{Coordinate, RawForecast},
};

use super::{ForecastSource, get_json, http_client, trim_base};

/// Client for the National Weather Service API (api.weather.gov).
///
/// A forecast takes two hops: `/points/{lat},{lon}` names the gridpoint
/// forecast URL, which is then fetched as-is.
#[derive(Debug, Clone)]
pub struct NwsClient {
    base_url: String,
    kind: ForecastKind,
    http: Client,
}

impl NwsClient {
    pub fn new(config: &EndpointConfig) -> Result<Self, ForecastError> {
        Ok(Self {
            base_url: trim_base(&config.weather_base_url).to_string(),
            kind: config.forecast_kind,
            http: http_client(config)?,
        })
    }

    pub fn points_url(&self, coordinate: &Coordinate) -> String {
        format!("{}/points/{}", self.base_url, coordinate)
    }

    /// Resolve a coordinate to its forecast resource URL.
    pub async fn forecast_url(&self, coordinate: &Coordinate) -> Result<String, ForecastError> {
        let metadata = get_json(&self.http, &self.points_url(coordinate)).await?;

        metadata
            .pointer(self.kind.metadata_pointer())
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or(ForecastError::MissingField { path: self.kind.metadata_field() })
    }
}

#[async_trait]
impl ForecastSource for NwsClient {
    #[instrument(skip_all, fields(coordinate = %coordinate))]
    async fn fetch(&self, coordinate: &Coordinate) -> Result<RawForecast, ForecastError> {
        let forecast_url = self.forecast_url(coordinate).await?;
        debug!(forecast_url, kind = ?self.kind, "Resolved forecast resource");

        let body = get_json(&self.http, &forecast_url).await?;
        Ok(RawForecast::new(body))
    }
}

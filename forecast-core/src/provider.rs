use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde_json::Value;
use std::{fmt::Debug, time::Duration};
use tracing::debug;

use crate::{
    config::EndpointConfig,
    error::ForecastError,
    model::{Coordinate, RawForecast},
};

pub mod geocoding;
pub mod nws;

pub use geocoding::GpsCoordinatesGeocoder;
pub use nws::NwsClient;

/// Something that can turn a coordinate into a raw forecast document.
#[async_trait]
pub trait ForecastSource: Send + Sync + Debug {
    async fn fetch(&self, coordinate: &Coordinate) -> Result<RawForecast, ForecastError>;
}

/// Something that can turn a free-text place name into a coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn locate(&self, location: &str) -> Result<Coordinate, ForecastError>;
}

/// Build the shared HTTP client from endpoint settings.
pub(crate) fn http_client(config: &EndpointConfig) -> Result<Client, ForecastError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/geo+json, application/json"));

    let mut builder =
        Client::builder().user_agent(config.user_agent.as_str()).default_headers(headers);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build().map_err(ForecastError::ClientInit)
}

/// GET `url` and parse the body as JSON, mapping each failure to its error kind.
pub(crate) async fn get_json(http: &Client, url: &str) -> Result<Value, ForecastError> {
    debug!(url, "GET");

    let res = http
        .get(url)
        .send()
        .await
        .map_err(|source| ForecastError::Network { url: url.to_string(), source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| ForecastError::Network { url: url.to_string(), source })?;

    if !status.is_success() {
        return Err(ForecastError::HttpStatus {
            url: url.to_string(),
            status,
            body: truncate_body(&body),
        });
    }

    serde_json::from_str(&body)
        .map_err(|source| ForecastError::MalformedResponse { url: url.to_string(), source })
}

/// Strip a trailing slash so paths can be appended with `format!`.
pub(crate) fn trim_base(url: &str) -> &str {
    url.trim_end_matches('/')
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("Not Found"), "Not Found");
    }

    #[test]
    fn truncate_body_cuts_on_char_boundary() {
        let body = "é".repeat(300);
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
    }

    #[test]
    fn trim_base_drops_trailing_slashes() {
        assert_eq!(trim_base("https://api.weather.gov/"), "https://api.weather.gov");
        assert_eq!(trim_base("http://localhost:8080"), "http://localhost:8080");
    }

    #[test]
    fn http_client_builds_with_defaults() {
        assert!(http_client(&EndpointConfig::default()).is_ok());
    }
}

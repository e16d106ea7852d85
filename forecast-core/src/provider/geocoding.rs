use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::instrument;

use crate::{config::EndpointConfig, error::ForecastError, model::Coordinate};

use super::{Geocoder, get_json, http_client, trim_base};

/// Place-name lookup against gps-coordinates.net.
#[derive(Debug, Clone)]
pub struct GpsCoordinatesGeocoder {
    base_url: String,
    http: Client,
}

impl GpsCoordinatesGeocoder {
    pub fn new(config: &EndpointConfig) -> Result<Self, ForecastError> {
        Ok(Self {
            base_url: trim_base(&config.geocoding_base_url).to_string(),
            http: http_client(config)?,
        })
    }

    pub fn lookup_url(&self, location: &str) -> String {
        format!("{}/api/{}", self.base_url, encode_location(location))
    }
}

#[async_trait]
impl Geocoder for GpsCoordinatesGeocoder {
    #[instrument(skip(self))]
    async fn locate(&self, location: &str) -> Result<Coordinate, ForecastError> {
        let body = get_json(&self.http, &self.lookup_url(location)).await?;

        Ok(Coordinate {
            latitude: coordinate_field(&body, "latitude")?,
            longitude: coordinate_field(&body, "longitude")?,
        })
    }
}

/// The lookup API expects `+` in place of spaces.
pub fn encode_location(location: &str) -> String {
    location.replace(' ', "+")
}

fn coordinate_field(body: &Value, key: &'static str) -> Result<String, ForecastError> {
    match body.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ForecastError::MissingField { path: key }),
    }
}

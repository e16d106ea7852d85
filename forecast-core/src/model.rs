use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A latitude/longitude pair in decimal degrees.
///
/// Kept as text: values typed by the user are passed through untouched and
/// range checking is left to the weather API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinate {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self { latitude: latitude.into(), longitude: longitude.into() }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Forecast body exactly as returned by the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawForecast(Value);

impl RawForecast {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for RawForecast {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The fields of a single `properties.periods` entry that the normalizer reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub start_time: String,
    pub temperature: Number,
    pub short_forecast: String,
}

/// One flattened, render-ready forecast line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastRow {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub temperature: Number,
    pub description: String,
}

impl fmt::Display for ForecastRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {}  {}F  {}", self.date, self.time, self.temperature, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coordinate_displays_as_path_segment() {
        let coord = Coordinate::new("40.760780", "-111.891045");
        assert_eq!(coord.to_string(), "40.760780,-111.891045");
    }

    #[test]
    fn raw_forecast_serializes_transparently() {
        let body = json!({ "properties": { "periods": [] } });
        let raw = RawForecast::new(body.clone());

        let text = serde_json::to_string(&raw).expect("serialize");
        assert_eq!(text, r#"{"properties":{"periods":[]}}"#);
        assert_eq!(raw.into_value(), body);
    }

    #[test]
    fn period_ignores_unknown_fields() {
        let period: ForecastPeriod = serde_json::from_value(json!({
            "number": 1,
            "name": "Tonight",
            "startTime": "2024-03-15T18:00:00-06:00",
            "temperature": 41,
            "temperatureUnit": "F",
            "shortForecast": "Mostly Clear"
        }))
        .expect("period should deserialize");

        assert_eq!(period.start_time, "2024-03-15T18:00:00-06:00");
        assert_eq!(period.temperature, Number::from(41));
        assert_eq!(period.short_forecast, "Mostly Clear");
    }
}

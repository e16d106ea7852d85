//! Flattening of the forecast endpoint's `properties.periods` list.

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    error::ForecastError,
    model::{ForecastPeriod, ForecastRow, RawForecast},
};

/// Project every forecast period into a [`ForecastRow`], preserving order.
///
/// Date and time are taken in the timestamp's own UTC offset, so
/// `2024-03-15T14:00:00-06:00` yields `2024-03-15` / `14:00:00`.
pub fn normalize(raw: &RawForecast) -> Result<Vec<ForecastRow>, ForecastError> {
    let periods = raw
        .as_value()
        .pointer("/properties/periods")
        .ok_or(ForecastError::MissingField { path: "properties.periods" })?
        .as_array()
        .ok_or(ForecastError::MalformedPeriods)?;

    let rows = periods
        .iter()
        .enumerate()
        .map(|(index, period)| normalize_period(index, period))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = rows.len(), "Normalized forecast periods");
    Ok(rows)
}

fn normalize_period(index: usize, value: &Value) -> Result<ForecastRow, ForecastError> {
    let period = ForecastPeriod::deserialize(value)
        .map_err(|source| ForecastError::InvalidPeriod { index, source })?;

    let start = DateTime::parse_from_rfc3339(&period.start_time).map_err(|source| {
        ForecastError::InvalidTimestamp { value: period.start_time.clone(), source }
    })?;

    Ok(ForecastRow {
        date: start.date_naive(),
        time: start.time(),
        temperature: period.temperature,
        description: period.short_forecast,
    })
}

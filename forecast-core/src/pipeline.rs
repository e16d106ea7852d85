//! The fetch → persist → normalize → render → persist chain for one coordinate.

use std::path::PathBuf;

use tracing::{info, instrument};

use crate::{
    config::OutputConfig,
    error::ForecastError,
    model::{Coordinate, ForecastRow},
    normalize::normalize,
    output::{save_html, save_raw_forecast},
    provider::ForecastSource,
    render::render,
};

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct ForecastReport {
    pub rows: Vec<ForecastRow>,
    pub json_path: PathBuf,
    pub html_path: PathBuf,
}

/// Fetch the forecast for `coordinate` and write both output files.
///
/// The raw body is saved before normalization, so it is on disk even when
/// the response turns out to be structurally unusable.
#[instrument(skip_all, fields(coordinate = %coordinate))]
pub async fn generate_report(
    source: &dyn ForecastSource,
    coordinate: &Coordinate,
    output: &OutputConfig,
) -> Result<ForecastReport, ForecastError> {
    let raw = source.fetch(coordinate).await?;

    let json_path = output.json_path();
    save_raw_forecast(&raw, &json_path)?;

    let rows = normalize(&raw)?;
    info!(periods = rows.len(), "Forecast normalized");

    let html_path = output.html_path();
    save_html(&render(&rows), &html_path)?;

    Ok(ForecastReport { rows, json_path, html_path })
}

//! Writing the raw forecast and the rendered document to disk.
//!
//! Both writers truncate an existing file in place; there is no backup or
//! atomic rename.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{error::ForecastError, model::RawForecast};

/// Serialize the forecast body as compact JSON.
pub fn save_raw_forecast(raw: &RawForecast, path: &Path) -> Result<(), ForecastError> {
    let mut writer = BufWriter::new(create(path)?);

    serde_json::to_writer(&mut writer, raw)
        .map_err(|source| ForecastError::WriteJson { path: path.to_path_buf(), source })?;
    writer
        .flush()
        .map_err(|source| ForecastError::Write { path: path.to_path_buf(), source })?;

    info!(path = %path.display(), "Saved raw forecast");
    Ok(())
}

pub fn save_html(html: &str, path: &Path) -> Result<(), ForecastError> {
    let mut writer = BufWriter::new(create(path)?);

    writer
        .write_all(html.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|source| ForecastError::Write { path: path.to_path_buf(), source })?;

    info!(path = %path.display(), "Saved forecast document");
    Ok(())
}

fn create(path: &Path) -> Result<File, ForecastError> {
    File::create(path).map_err(|source| ForecastError::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn html_is_written_verbatim() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("forecast.html");

        save_html("<p>unchanged &amp; raw</p>", &path).expect("save");

        assert_eq!(std::fs::read_to_string(&path).expect("read"), "<p>unchanged &amp; raw</p>");
    }

    #[test]
    fn raw_forecast_is_compact() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("weather_data.json");

        save_raw_forecast(&RawForecast::new(json!({ "properties": { "periods": [] } })), &path)
            .expect("save");

        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            r#"{"properties":{"periods":[]}}"#
        );
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("forecast.html");

        let err = save_html("", &path).unwrap_err();
        assert!(matches!(err, ForecastError::Write { .. }));
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`ForecastError`], for callers that only need
/// to decide how to present a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    MalformedResponse,
    MissingField,
    Io,
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to build HTTP client")]
    ClientInit(#[source] reqwest::Error),

    #[error("Network request failed for {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} failed with status {status}: {body}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Response from {url} is not valid JSON")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response is missing required field '{path}'")]
    MissingField { path: &'static str },

    #[error("Field 'properties.periods' is not a list of forecast periods")]
    MalformedPeriods,

    #[error("Forecast period #{index} is malformed")]
    InvalidPeriod {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid forecast timestamp '{value}'")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize JSON to '{}'", path.display())]
    WriteJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::ClientInit(_)
            | ForecastError::Network { .. }
            | ForecastError::HttpStatus { .. } => ErrorKind::Network,
            ForecastError::MalformedResponse { .. }
            | ForecastError::MalformedPeriods
            | ForecastError::InvalidPeriod { .. }
            | ForecastError::InvalidTimestamp { .. } => ErrorKind::MalformedResponse,
            ForecastError::MissingField { .. } => ErrorKind::MissingField,
            ForecastError::Write { .. } | ForecastError::WriteJson { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_classified_separately() {
        let err = ForecastError::MissingField { path: "properties.periods" };

        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert!(err.to_string().contains("properties.periods"));
    }

    #[test]
    fn write_error_mentions_path() {
        let err = ForecastError::Write {
            path: PathBuf::from("out/forecast.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("out/forecast.html"));
    }
}

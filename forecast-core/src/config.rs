use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::model::Coordinate;

/// Which forecast resource of the points metadata to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastKind {
    /// Twelve-hour day/night periods (`properties.forecast`).
    #[default]
    Standard,
    /// One period per hour (`properties.forecastHourly`).
    Hourly,
}

impl ForecastKind {
    /// JSON pointer into the points metadata response.
    pub fn metadata_pointer(&self) -> &'static str {
        match self {
            ForecastKind::Standard => "/properties/forecast",
            ForecastKind::Hourly => "/properties/forecastHourly",
        }
    }

    /// Dotted field path used in error messages.
    pub fn metadata_field(&self) -> &'static str {
        match self {
            ForecastKind::Standard => "properties.forecast",
            ForecastKind::Hourly => "properties.forecastHourly",
        }
    }
}

/// Product token plus a contact, the form api.weather.gov asks clients to send.
pub const DEFAULT_USER_AGENT: &str =
    concat!("forecast-cli/", env!("CARGO_PKG_VERSION"), " (github.com/forecast-cli)");

/// Remote services and how to talk to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub weather_base_url: String,
    pub geocoding_base_url: String,
    /// api.weather.gov rejects requests without a User-Agent.
    pub user_agent: String,
    /// Unset means requests may block indefinitely.
    pub timeout_secs: Option<u64>,
    pub forecast_kind: ForecastKind,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            weather_base_url: "https://api.weather.gov".to_string(),
            geocoding_base_url: "http://www.gps-coordinates.net".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            forecast_kind: ForecastKind::Standard,
        }
    }
}

/// Where the raw JSON and rendered HTML end up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub json_file: String,
    pub html_file: String,
}

impl OutputConfig {
    pub fn json_path(&self) -> PathBuf {
        self.dir.join(&self.json_file)
    }

    pub fn html_path(&self) -> PathBuf {
        self.dir.join(&self.html_file)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            json_file: "weather_data.json".to_string(),
            html_file: "forecast.html".to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// [endpoints]
/// user_agent = "my-forecast (me@example.com)"
///
/// [fallback]
/// latitude = "47.6062"
/// longitude = "-122.3321"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoints: EndpointConfig,
    pub output: OutputConfig,
    /// Coordinate used by the "prebuilt" menu option.
    pub fallback: Coordinate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: EndpointConfig::default(),
            output: OutputConfig::default(),
            fallback: Coordinate::new("40.760780", "-111.891045"),
        }
    }
}

impl Config {
    /// Load config from the platform location, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load config from `path`, or return defaults if the file is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_endpoints() {
        let cfg = Config::default();

        assert_eq!(cfg.endpoints.weather_base_url, "https://api.weather.gov");
        assert_eq!(cfg.endpoints.geocoding_base_url, "http://www.gps-coordinates.net");
        assert_eq!(cfg.endpoints.timeout_secs, None);
        assert_eq!(cfg.endpoints.user_agent, "forecast-cli/0.1.0 (github.com/forecast-cli)");
        assert_eq!(cfg.output.json_path(), PathBuf::from("./weather_data.json"));
        assert_eq!(cfg.output.html_path(), PathBuf::from("./forecast.html"));
        assert_eq!(cfg.fallback, Coordinate::new("40.760780", "-111.891045"));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [endpoints]
            forecast_kind = "hourly"

            [output]
            dir = "out"
            "#,
        )
        .expect("config should parse");

        assert_eq!(cfg.endpoints.forecast_kind, ForecastKind::Hourly);
        assert_eq!(cfg.endpoints.weather_base_url, "https://api.weather.gov");
        assert_eq!(cfg.output.html_path(), PathBuf::from("out/forecast.html"));
        assert_eq!(cfg.fallback.latitude, "40.760780");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.toml")).expect("load");

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.endpoints.timeout_secs = Some(15);
        cfg.fallback = Coordinate::new("47.6062", "-122.3321");
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "endpoints = 3").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn forecast_kind_selects_metadata_field() {
        assert_eq!(ForecastKind::Standard.metadata_pointer(), "/properties/forecast");
        assert_eq!(ForecastKind::Hourly.metadata_field(), "properties.forecastHourly");
    }
}

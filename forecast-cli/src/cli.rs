use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use forecast_core::{
    Config, CoordinateResolver, ForecastKind, GpsCoordinatesGeocoder, NwsClient, generate_report,
};
use std::path::PathBuf;
use tracing::info;

use crate::prompt::InquirePrompter;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "forecast",
    version,
    about = "Render a National Weather Service forecast as an HTML table"
)]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick a location interactively and render its forecast (default).
    Run {
        /// Directory for weather_data.json and forecast.html.
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Use the hour-by-hour forecast instead of day/night periods.
        #[arg(long)]
        hourly: bool,
    },

    /// Write a config file populated with the defaults.
    InitConfig {
        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Print where the config file is read from.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Run { out_dir: None, hourly: false }) {
            Command::Run { out_dir, hourly } => {
                let mut config = match &self.config {
                    Some(path) => Config::load_from(path)?,
                    None => Config::load()?,
                };
                if let Some(dir) = out_dir {
                    config.output.dir = dir;
                }
                if hourly {
                    config.endpoints.forecast_kind = ForecastKind::Hourly;
                }
                run_forecast(config).await?;
            }
            Command::InitConfig { force } => {
                let config_path = resolve_config_path(self.config)?;
                if config_path.exists() && !force {
                    bail!(
                        "Config file already exists: {}\n\
                         Hint: pass --force to overwrite it.",
                        config_path.display()
                    );
                }
                Config::default().save_to(&config_path)?;
                println!("Wrote default configuration to {}", config_path.display());
            }
            Command::ConfigPath => {
                println!("{}", resolve_config_path(self.config)?.display());
            }
        }

        Ok(())
    }
}

fn resolve_config_path(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => Config::config_file_path(),
    }
}

async fn run_forecast(config: Config) -> anyhow::Result<()> {
    let geocoder = GpsCoordinatesGeocoder::new(&config.endpoints)?;
    let source = NwsClient::new(&config.endpoints)?;

    let resolver = CoordinateResolver::new(&geocoder, config.fallback.clone());
    let coordinate = resolver.resolve(&mut InquirePrompter).await?;
    info!(%coordinate, "Coordinate resolved");

    let report = generate_report(&source, &coordinate, &config.output)
        .await
        .with_context(|| format!("Failed to produce forecast for {coordinate}"))?;

    for row in &report.rows {
        println!("{row}");
    }
    println!(
        "\nSaved {} and {}",
        report.json_path.display(),
        report.html_path.display()
    );

    Ok(())
}

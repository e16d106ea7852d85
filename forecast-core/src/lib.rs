//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration (endpoints, output files, fallback coordinate)
//! - Providers for the National Weather Service and a place-name geocoder
//! - Normalization of forecast periods into flat rows
//! - HTML rendering and file output
//! - The interactive coordinate resolver, independent of any terminal library
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod provider;
pub mod render;
pub mod resolver;

pub use config::{Config, EndpointConfig, ForecastKind, OutputConfig};
pub use error::{ErrorKind, ForecastError};
pub use model::{Coordinate, ForecastPeriod, ForecastRow, RawForecast};
pub use normalize::normalize;
pub use pipeline::{ForecastReport, generate_report};
pub use provider::{ForecastSource, Geocoder, GpsCoordinatesGeocoder, NwsClient};
pub use render::render;
pub use resolver::{CoordinateResolver, InputMode, Prompter, ResolverState};

//! Interactive choice of the coordinate to forecast.
//!
//! The menu is an explicit state machine: [`CoordinateResolver::step`]
//! performs one transition and [`CoordinateResolver::resolve`] drives it
//! until a coordinate is known. Terminal I/O goes through [`Prompter`].

use anyhow::Result;
use tracing::{debug, warn};

use crate::{error::ErrorKind, model::Coordinate, provider::Geocoder};

pub const MENU: &str = "Welcome to the Weather Forecast App! Would you like to:\n \
     1. Use your own latitude and longitude coordinates\n \
     2. Use the coordinates from a given location\n \
     3. Use prebuilt latitude and longitude";

pub const CHOICE_PROMPT: &str = "Enter 1, 2 or 3:";
pub const LATITUDE_PROMPT: &str = "Enter the latitude:";
pub const LONGITUDE_PROMPT: &str = "Enter the longitude:";
pub const LOCATION_PROMPT: &str =
    "Please enter the location you would like to get the weather forecast for:";

pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const INVALID_LOCATION_DATA: &str = "Error: Invalid location data received. Please try again.";

/// Line-oriented user interaction.
pub trait Prompter {
    /// Ask a question and return the user's answer.
    fn ask(&mut self, message: &str) -> Result<String>;

    /// Show a message that needs no answer.
    fn notify(&mut self, message: &str);
}

/// How the user wants to supply a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Manual,
    Location,
    Prebuilt,
}

impl TryFrom<&str> for InputMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "1" => Ok(InputMode::Manual),
            "2" => Ok(InputMode::Location),
            "3" => Ok(InputMode::Prebuilt),
            other => Err(anyhow::anyhow!("Unknown menu choice '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverState {
    AwaitingChoice,
    AwaitingManualInput,
    AwaitingLocationInput,
    Resolved(Coordinate),
    /// A recoverable failure; the message is shown before returning to the menu.
    Error(String),
}

#[derive(Debug)]
pub struct CoordinateResolver<'a> {
    geocoder: &'a dyn Geocoder,
    fallback: Coordinate,
}

impl<'a> CoordinateResolver<'a> {
    pub fn new(geocoder: &'a dyn Geocoder, fallback: Coordinate) -> Self {
        Self { geocoder, fallback }
    }

    /// Run the menu until a coordinate is chosen.
    ///
    /// Only prompt failures (e.g. the user aborting input) end this early.
    pub async fn resolve(&self, prompter: &mut dyn Prompter) -> Result<Coordinate> {
        let mut state = ResolverState::AwaitingChoice;
        loop {
            state = match state {
                ResolverState::Resolved(coordinate) => return Ok(coordinate),
                other => self.step(other, prompter).await?,
            };
        }
    }

    /// Perform a single transition.
    pub async fn step(
        &self,
        state: ResolverState,
        prompter: &mut dyn Prompter,
    ) -> Result<ResolverState> {
        let next = match state {
            ResolverState::AwaitingChoice => {
                prompter.notify(MENU);
                let answer = prompter.ask(CHOICE_PROMPT)?;
                match InputMode::try_from(answer.as_str()) {
                    Ok(InputMode::Manual) => ResolverState::AwaitingManualInput,
                    Ok(InputMode::Location) => ResolverState::AwaitingLocationInput,
                    Ok(InputMode::Prebuilt) => ResolverState::Resolved(self.fallback.clone()),
                    Err(err) => {
                        debug!(%err, "Rejected menu input");
                        prompter.notify(INVALID_CHOICE);
                        ResolverState::AwaitingChoice
                    }
                }
            }
            ResolverState::AwaitingManualInput => {
                let latitude = prompter.ask(LATITUDE_PROMPT)?;
                let longitude = prompter.ask(LONGITUDE_PROMPT)?;
                ResolverState::Resolved(Coordinate::new(latitude.trim(), longitude.trim()))
            }
            ResolverState::AwaitingLocationInput => {
                let location = prompter.ask(LOCATION_PROMPT)?;
                match self.geocoder.locate(&location).await {
                    Ok(coordinate) => ResolverState::Resolved(coordinate),
                    Err(err) => {
                        warn!(error = %err, "Location lookup failed");
                        if err.kind() == ErrorKind::MissingField {
                            ResolverState::Error(INVALID_LOCATION_DATA.to_string())
                        } else {
                            ResolverState::Error(format!(
                                "Error: Unable to retrieve location data. {err}"
                            ))
                        }
                    }
                }
            }
            ResolverState::Error(message) => {
                prompter.notify(&message);
                ResolverState::AwaitingChoice
            }
            resolved @ ResolverState::Resolved(_) => resolved,
        };

        Ok(next)
    }
}

//! Core library for the `wetter` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and the search orchestration on top of it
//! - Display logic: German translations, icons, daily forecast summaries
//!
//! It is used by `wetter-cli`, but can also be reused by other front ends.

pub mod config;
pub mod current;
pub mod error;
pub mod forecast;
pub mod icon;
pub mod model;
pub mod provider;
pub mod search;
pub mod session;
pub mod translate;

pub use config::{Config, Theme};
pub use current::CurrentDisplay;
pub use error::FetchError;
pub use forecast::aggregate_daily;
pub use icon::WeatherIcon;
pub use model::{CurrentWeather, DailySummary, ForecastEntry};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use search::SearchForm;
pub use session::{SearchOutcome, SessionState, WeatherSession};
pub use translate::translate;

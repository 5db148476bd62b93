//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather query, with every failure classified into a user-facing message
//! - Presentation of a successful report (temperature, description, glyph)
//!
//! It is used by `weather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod model;
pub mod present;
pub mod provider;

pub use config::{Config, ProviderConfig};
pub use error::ErrorKind;
pub use model::{Failure, PresentationResult, QueryRequest, QueryResult, WeatherReport};
pub use present::{Glyph, capitalize_first, code_to_glyph, fahrenheit, present};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// One user action: look up the current weather for `city`.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub city: String,
    pub api_key: String,
}

impl QueryRequest {
    pub fn new(city: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { city: city.into(), api_key: api_key.into() }
    }
}

/// Fields extracted from a successful OpenWeather "current weather" payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// `main.temp`, in Kelvin.
    pub temperature_raw: f64,
    /// `weather[0].description`, as sent by the provider.
    pub description: String,
    /// `weather[0].id`.
    pub condition_code: i64,
}

/// A classified query failure, carrying the message shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl Failure {
    /// Failure with the fixed message for `kind`.
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.message();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }
}

/// Outcome of a single query. Exactly one of the two.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Success(WeatherReport),
    Failure(Failure),
}

impl QueryResult {
    pub fn into_result(self) -> Result<WeatherReport, Failure> {
        match self {
            QueryResult::Success(report) => Ok(report),
            QueryResult::Failure(failure) => Err(failure),
        }
    }
}

/// Display-ready fields for a successful report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresentationResult {
    pub temperature_display: String,
    pub description_display: String,
    pub glyph: String,
}

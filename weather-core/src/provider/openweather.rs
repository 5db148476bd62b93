use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};
use tracing::{debug, instrument, warn};

use crate::{
    config::ProviderConfig,
    error::ErrorKind,
    model::{Failure, QueryRequest, QueryResult, WeatherReport},
};

use super::WeatherProvider;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    config: ProviderConfig,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use a preconfigured HTTP client instead of the default one.
    pub fn with_client(config: ProviderConfig, http: Client) -> Self {
        Self { config, http }
    }

    fn endpoint(&self) -> String {
        format!("{}{CURRENT_WEATHER_PATH}", self.config.base_url)
    }

    async fn fetch_current(&self, request: &QueryRequest) -> Result<WeatherReport, Failure> {
        let url = self.endpoint();
        debug!(url = %url, "fetching current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", request.city.as_str()), ("appid", request.api_key.as_str())])
            .send()
            .await
            .map_err(transport_failure)?;

        let status = res.status();
        if !status.is_success() {
            return Err(http_failure(status));
        }

        let body = res.text().await.map_err(transport_failure)?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| decode_failure(format!("invalid weather payload: {e}")))?;

        if parsed.cod != 200 {
            return Err(payload_code_failure(parsed.cod, parsed.message.as_deref()));
        }

        let main = parsed
            .main
            .ok_or_else(|| decode_failure("weather payload has no `main` section".into()))?;
        let weather = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| decode_failure("weather payload has no conditions".into()))?;

        Ok(WeatherReport {
            temperature_raw: main.temp,
            description: weather.description,
            condition_code: weather.id,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self, request), fields(city = %request.city))]
    async fn query(&self, request: &QueryRequest) -> QueryResult {
        match self.fetch_current(request).await {
            Ok(report) => {
                debug!(code = report.condition_code, "weather query succeeded");
                QueryResult::Success(report)
            }
            Err(failure) => {
                warn!(kind = %failure.kind, "weather query failed");
                QueryResult::Failure(failure)
            }
        }
    }

    fn api_key(&self) -> &str {
        &self.config.api_key
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(deserialize_with = "int_or_string")]
    cod: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    main: Option<OwMain>,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

/// OpenWeather sends `cod` as a number on success and as a string on errors.
fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Int(i64),
        Text(String),
    }

    match Code::deserialize(deserializer)? {
        Code::Int(n) => Ok(n),
        Code::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn http_failure(status: StatusCode) -> Failure {
    Failure::new(ErrorKind::from_status(status.as_u16()))
}

/// 2xx response whose payload reports a non-200 `cod`.
fn payload_code_failure(cod: i64, message: Option<&str>) -> Failure {
    let status = u16::try_from(cod).unwrap_or(u16::MAX);
    let kind = ErrorKind::OtherHttpError { status };
    match message {
        Some(detail) if !detail.is_empty() => {
            Failure::with_message(kind, format!("{}\n{detail}", kind.message()))
        }
        _ => Failure::new(kind),
    }
}

fn transport_failure(err: reqwest::Error) -> Failure {
    // The request URL carries the API key.
    let err = err.without_url();

    if err.is_connect() {
        Failure::new(ErrorKind::ConnectionFailure)
    } else if err.is_timeout() {
        Failure::new(ErrorKind::Timeout)
    } else if err.is_redirect() {
        Failure::new(ErrorKind::TooManyRedirects)
    } else {
        decode_failure(err.to_string())
    }
}

fn decode_failure(detail: String) -> Failure {
    Failure::with_message(ErrorKind::OtherTransportError, format!("Request Error:\n{detail}"))
}

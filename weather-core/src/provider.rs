use crate::{
    config::ProviderConfig,
    model::{QueryRequest, QueryResult},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather for a city.
///
/// Implementations never return an error: every failure is classified into
/// [`QueryResult::Failure`] with a message ready to show the user.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn query(&self, request: &QueryRequest) -> QueryResult;

    /// Credential the provider was built with.
    fn api_key(&self) -> &str;

    /// Query `city` using the configured credential.
    async fn query_city(&self, city: &str) -> QueryResult {
        let request = QueryRequest::new(city, self.api_key());
        self.query(&request).await
    }
}

/// Construct the provider from an explicit configuration value.
pub fn provider_from_config(config: ProviderConfig) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(config))
}

use crate::{
    Config,
    error::FetchError,
    model::{CurrentWeather, ForecastEntry},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current conditions and 3-hour forecasts for a city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, FetchError>;

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchError>;
}

/// Build the OpenWeather client from the configured key and base URL.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: run `wetter configure` or set OPENWEATHER_API_KEY."
        )
    })?;

    Ok(OpenWeatherProvider::with_base_url(
        api_key.to_owned(),
        config.base_url.as_str(),
    ))
}

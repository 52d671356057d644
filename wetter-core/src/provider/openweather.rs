use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::FetchError,
    model::{CurrentWeather, ForecastEntry},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `{base_url}/{endpoint}` for `city` in metric units.
    ///
    /// Returns the status and the body; the caller decides what a failure means.
    async fn get(&self, endpoint: &str, city: &str) -> Result<(reqwest::StatusCode, String), FetchError> {
        let url = format!("{}/{endpoint}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "OpenWeather {endpoint} response");

        Ok((status, body))
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize, Default)]
struct OwSys {
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

/// Code and description of the primary condition, if the API sent one.
fn primary_condition(weather: Vec<OwWeather>) -> (i64, String) {
    weather
        .into_iter()
        .next()
        .map(|w| (w.id, w.description))
        .unwrap_or_else(|| (0, "unknown".to_string()))
}

impl From<OwCurrentResponse> for CurrentWeather {
    fn from(parsed: OwCurrentResponse) -> Self {
        let (condition_code, condition_description) = primary_condition(parsed.weather);
        Self {
            city_name: parsed.name,
            country_code: parsed.sys.country,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            humidity_pct: parsed.main.humidity,
            wind_speed_ms: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            condition_code,
            condition_description,
        }
    }
}

impl From<OwForecastEntry> for ForecastEntry {
    fn from(entry: OwForecastEntry) -> Self {
        let (condition_code, condition_description) = primary_condition(entry.weather);
        Self {
            timestamp_unix: entry.dt,
            temperature_c: entry.main.temp,
            condition_code,
            condition_description,
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self))]
    async fn fetch_current(&self, city: &str) -> Result<CurrentWeather, FetchError> {
        let (status, body) = self.get("weather", city).await?;
        if !status.is_success() {
            debug!(body = %truncate_body(&body), "current weather request rejected");
            return Err(FetchError::CityNotFound { status });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }

    #[instrument(skip(self))]
    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastEntry>, FetchError> {
        let (status, body) = self.get("forecast", city).await?;
        if !status.is_success() {
            debug!(body = %truncate_body(&body), "forecast request rejected");
            return Err(FetchError::ForecastUnavailable { status });
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;
        Ok(parsed.list.into_iter().map(ForecastEntry::from).collect())
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = (0..=MAX).rev().find(|i| body.is_char_boundary(*i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_current_weather_payload() {
        let body = r#"{
            "name": "Berlin",
            "dt": 1728907200,
            "sys": { "country": "DE" },
            "main": { "temp": 14.5, "feels_like": 13.9, "humidity": 72, "pressure": 1013 },
            "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
            "wind": { "speed": 3.6, "deg": 240 }
        }"#;

        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        let current = CurrentWeather::from(parsed);

        assert_eq!(current.city_name, "Berlin");
        assert_eq!(current.country_code, "DE");
        assert_eq!(current.pressure_hpa, 1013);
        assert_eq!(current.condition_code, 803);
        assert_eq!(current.condition_description, "broken clouds");
    }

    #[test]
    fn missing_condition_becomes_unknown() {
        let body = r#"{
            "list": [{ "dt": 1728907200, "main": { "temp": 9.0 }, "weather": [] }]
        }"#;

        let parsed: OwForecastResponse = serde_json::from_str(body).unwrap();
        let entries: Vec<ForecastEntry> = parsed.list.into_iter().map(Into::into).collect();

        assert_eq!(entries[0].condition_code, 0);
        assert_eq!(entries[0].condition_description, "unknown");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let provider = OpenWeatherProvider::with_base_url("KEY".into(), "http://localhost:9000/");
        assert_eq!(provider.base_url(), "http://localhost:9000");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "ä".repeat(150);
        let cut = truncate_body(&body);
        assert!(cut.ends_with("..."));
        assert!(cut.len() <= 203);
    }
}

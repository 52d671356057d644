use serde::Serialize;

use crate::{
    icon::WeatherIcon,
    model::{CurrentWeather, round_half_up},
    translate::translate,
};

pub const FEELS_LIKE_LABEL: &str = "Gefühlt wie";
pub const HUMIDITY_LABEL: &str = "Luftfeuchtigkeit";
pub const WIND_SPEED_LABEL: &str = "Windgeschwindigkeit";
pub const PRESSURE_LABEL: &str = "Luftdruck";

/// Display-ready values for the "current weather" tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentDisplay {
    /// `"{city}, {country}"`
    pub heading: String,
    pub icon: WeatherIcon,
    pub temperature_c: i64,
    /// German description, or the API text when no translation exists.
    pub description: String,
    pub feels_like_c: i64,
    pub humidity_pct: u8,
    pub wind_speed_ms: i64,
    pub pressure_hpa: u32,
}

impl CurrentDisplay {
    /// The four detail cards as `(label, formatted value)` pairs.
    pub fn details(&self) -> [(&'static str, String); 4] {
        [
            (FEELS_LIKE_LABEL, format!("{}°C", self.feels_like_c)),
            (HUMIDITY_LABEL, format!("{}%", self.humidity_pct)),
            (WIND_SPEED_LABEL, format!("{} m/s", self.wind_speed_ms)),
            (PRESSURE_LABEL, format!("{} hPa", self.pressure_hpa)),
        ]
    }
}

impl From<&CurrentWeather> for CurrentDisplay {
    fn from(weather: &CurrentWeather) -> Self {
        Self {
            heading: format!("{}, {}", weather.city_name, weather.country_code),
            icon: WeatherIcon::from_code(weather.condition_code),
            temperature_c: round_half_up(weather.temperature_c),
            description: translate(&weather.condition_description).to_string(),
            feels_like_c: round_half_up(weather.feels_like_c),
            humidity_pct: weather.humidity_pct,
            wind_speed_ms: round_half_up(weather.wind_speed_ms),
            pressure_hpa: weather.pressure_hpa,
        }
    }
}

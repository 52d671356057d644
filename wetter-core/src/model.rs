use serde::{Deserialize, Serialize};

/// Current conditions for one city, as returned by the `weather` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub city_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_ms: f64,
    pub pressure_hpa: u32,
    pub condition_code: i64,
    pub condition_description: String,
}

/// One 3-hour reading from the `forecast` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp_unix: i64,
    pub temperature_c: f64,
    pub condition_code: i64,
    pub condition_description: String,
}

/// All readings of one calendar day folded into a single card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// German short label, e.g. `Mo., 14. Okt.`
    pub date_label: String,
    pub average_temperature_c: i64,
    pub modal_condition_code: i64,
    /// Raw (English) description; translate before display.
    pub modal_condition_description: String,
}

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

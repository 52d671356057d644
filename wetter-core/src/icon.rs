use serde::{Deserialize, Serialize};

/// Icon category for an OpenWeather condition code.
///
/// See <https://openweathermap.org/weather-conditions> for the code groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherIcon {
    Thunderstorm,
    Drizzle,
    Rain,
    Snow,
    Fog,
    Clear,
    Cloud,
    /// Fallback for codes outside every known group.
    Wind,
}

impl WeatherIcon {
    pub fn from_code(code: i64) -> Self {
        match code {
            200..=299 => WeatherIcon::Thunderstorm,
            300..=399 => WeatherIcon::Drizzle,
            500..=599 => WeatherIcon::Rain,
            600..=699 => WeatherIcon::Snow,
            700..=799 => WeatherIcon::Fog,
            800 => WeatherIcon::Clear,
            801..=899 => WeatherIcon::Cloud,
            // Legacy 9xx codes were extreme and wind-scale conditions.
            _ => WeatherIcon::Wind,
        }
    }

    /// Terminal glyph for the icon.
    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherIcon::Thunderstorm => "⛈",
            WeatherIcon::Drizzle => "🌦",
            WeatherIcon::Rain => "🌧",
            WeatherIcon::Snow => "🌨",
            WeatherIcon::Fog => "🌫",
            WeatherIcon::Clear => "☀",
            WeatherIcon::Cloud => "☁",
            WeatherIcon::Wind => "💨",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherIcon::Thunderstorm => "Gewitter",
            WeatherIcon::Drizzle => "Niesel",
            WeatherIcon::Rain => "Regen",
            WeatherIcon::Snow => "Schnee",
            WeatherIcon::Fog => "Nebel",
            WeatherIcon::Clear => "Sonne",
            WeatherIcon::Cloud => "Wolken",
            WeatherIcon::Wind => "Wind",
        }
    }
}

impl std::fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_codes() {
        assert_eq!(WeatherIcon::from_code(800), WeatherIcon::Clear);
        assert_eq!(WeatherIcon::from_code(801), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::from_code(201), WeatherIcon::Thunderstorm);
        assert_eq!(WeatherIcon::from_code(999), WeatherIcon::Wind);
    }

    #[test]
    fn every_cloud_code_maps_to_cloud() {
        for code in 801..=804 {
            assert_eq!(WeatherIcon::from_code(code), WeatherIcon::Cloud);
        }
    }

    #[test]
    fn group_boundaries() {
        assert_eq!(WeatherIcon::from_code(200), WeatherIcon::Thunderstorm);
        assert_eq!(WeatherIcon::from_code(299), WeatherIcon::Thunderstorm);
        assert_eq!(WeatherIcon::from_code(300), WeatherIcon::Drizzle);
        assert_eq!(WeatherIcon::from_code(399), WeatherIcon::Drizzle);
        assert_eq!(WeatherIcon::from_code(500), WeatherIcon::Rain);
        assert_eq!(WeatherIcon::from_code(600), WeatherIcon::Snow);
        assert_eq!(WeatherIcon::from_code(700), WeatherIcon::Fog);
        assert_eq!(WeatherIcon::from_code(799), WeatherIcon::Fog);
        assert_eq!(WeatherIcon::from_code(899), WeatherIcon::Cloud);
        assert_eq!(WeatherIcon::from_code(900), WeatherIcon::Wind);
    }

    #[test]
    fn gaps_fall_back_to_wind() {
        // 4xx is not a condition group.
        assert_eq!(WeatherIcon::from_code(450), WeatherIcon::Wind);
        assert_eq!(WeatherIcon::from_code(199), WeatherIcon::Wind);
        assert_eq!(WeatherIcon::from_code(0), WeatherIcon::Wind);
        assert_eq!(WeatherIcon::from_code(-1), WeatherIcon::Wind);
    }
}

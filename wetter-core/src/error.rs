use reqwest::StatusCode;
use thiserror::Error;

pub const CITY_NOT_FOUND_MESSAGE: &str = "Stadt nicht gefunden oder API-Fehler";
pub const FORECAST_UNAVAILABLE_MESSAGE: &str = "Vorhersagedaten nicht verfügbar";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Ein unbekannter Fehler ist aufgetreten";

/// Failure of one of the two weather requests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The current-weather endpoint answered with a non-success status.
    #[error("current weather request failed with status {status}")]
    CityNotFound { status: StatusCode },

    /// The forecast endpoint answered with a non-success status.
    #[error("forecast request failed with status {status}")]
    ForecastUnavailable { status: StatusCode },

    #[error("request could not be completed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not valid weather JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Text for the error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::CityNotFound { .. } => CITY_NOT_FOUND_MESSAGE,
            FetchError::ForecastUnavailable { .. } => FORECAST_UNAVAILABLE_MESSAGE,
            FetchError::Transport(_) | FetchError::Decode(_) => UNKNOWN_ERROR_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_map_to_their_own_message() {
        let current = FetchError::CityNotFound { status: StatusCode::NOT_FOUND };
        let forecast = FetchError::ForecastUnavailable { status: StatusCode::BAD_GATEWAY };

        assert_eq!(current.user_message(), CITY_NOT_FOUND_MESSAGE);
        assert_eq!(forecast.user_message(), FORECAST_UNAVAILABLE_MESSAGE);
        assert!(current.to_string().contains("404"));
    }

    #[test]
    fn decode_errors_use_the_fallback_message() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(FetchError::from(err).user_message(), UNKNOWN_ERROR_MESSAGE);
    }
}

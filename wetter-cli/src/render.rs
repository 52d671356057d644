//! Terminal layout: header, error banner, tab bar and the two tab bodies.

use chrono::TimeZone;
use crossterm::style::{Color, Stylize, style};
use wetter_core::{
    CurrentDisplay, DailySummary, SessionState, Theme, WeatherIcon,
    translate::{capitalize_words, translate},
};

pub const APP_TITLE: &str = "Wetter App";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Current,
    Forecast,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Current, Tab::Forecast];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Current => "Aktuelles Wetter",
            Tab::Forecast => "5-Tage Vorhersage",
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Role {
    Title,
    Accent,
    Muted,
    Error,
}

/// Applies the theme's colours, or nothing when colour output is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    pub theme: Theme,
    pub color: bool,
}

impl Painter {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    pub fn plain() -> Self {
        Self::new(Theme::Light, false)
    }

    fn color_for(&self, role: Role) -> Color {
        match (self.theme, role) {
            (Theme::Light, Role::Title) => Color::DarkBlue,
            (Theme::Light, Role::Accent) => Color::DarkMagenta,
            (Theme::Light, Role::Muted) => Color::DarkGrey,
            (Theme::Light, Role::Error) => Color::DarkRed,
            (Theme::Dark, Role::Title) => Color::Cyan,
            (Theme::Dark, Role::Accent) => Color::Yellow,
            (Theme::Dark, Role::Muted) => Color::Grey,
            (Theme::Dark, Role::Error) => Color::Red,
        }
    }

    fn paint(&self, text: &str, role: Role) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = style(text).with(self.color_for(role));
        match role {
            Role::Title | Role::Error => styled.bold().to_string(),
            Role::Accent | Role::Muted => styled.to_string(),
        }
    }

    fn active_tab(&self, text: &str) -> String {
        if self.color {
            style(text)
                .with(self.color_for(Role::Title))
                .bold()
                .underlined()
                .to_string()
        } else {
            format!("[{text}]")
        }
    }
}

pub fn header(painter: &Painter) -> String {
    format!(
        "{}  {}",
        painter.paint(APP_TITLE, Role::Title),
        painter.paint(&format!("Design: {}", painter.theme.label()), Role::Muted)
    )
}

pub fn error_banner(message: &str, painter: &Painter) -> String {
    painter.paint(&format!("✖ {message}"), Role::Error)
}

/// Everything below the search field. `tab = None` prints both tabs.
pub fn screen<Tz: TimeZone>(
    state: &SessionState,
    tab: Option<Tab>,
    painter: &Painter,
    tz: &Tz,
) -> String {
    let mut out = String::new();

    if let Some(message) = &state.error {
        out.push_str(&error_banner(message, painter));
        out.push('\n');
    }

    // The card with both tabs only exists once current weather is loaded.
    let Some(current) = state.current_display() else {
        return out;
    };
    let days = state.daily_forecast(tz);

    let tabs: Vec<Tab> = match tab {
        Some(t) => vec![t],
        None => Tab::ALL.to_vec(),
    };

    for (i, t) in tabs.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&tab_bar(t, painter));
        out.push_str("\n\n");
        match t {
            Tab::Current => out.push_str(&current_tab(&current, painter)),
            Tab::Forecast => {
                if let Some(days) = &days {
                    out.push_str(&forecast_tab(days, painter));
                }
            }
        }
    }

    out
}

pub fn tab_bar(active: Tab, painter: &Painter) -> String {
    Tab::ALL
        .iter()
        .map(|&t| {
            if t == active {
                painter.active_tab(t.title())
            } else {
                painter.paint(&format!(" {} ", t.title()), Role::Muted)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn current_tab(current: &CurrentDisplay, painter: &Painter) -> String {
    let mut out = String::new();
    out.push_str(&painter.paint(&current.heading, Role::Title));
    out.push('\n');
    out.push_str(&format!(
        "{}  {}\n",
        current.icon,
        painter.paint(&format!("{}°C", current.temperature_c), Role::Accent)
    ));
    out.push_str(&capitalize_words(&current.description));
    out.push_str("\n\n");

    for (label, value) in current.details() {
        out.push_str(&format!(
            "  {}  {value}\n",
            painter.paint(&format!("{label:<20}"), Role::Muted)
        ));
    }
    out
}

pub fn forecast_tab(days: &[DailySummary], painter: &Painter) -> String {
    let mut out = String::new();
    for day in days {
        let icon = WeatherIcon::from_code(day.modal_condition_code);
        let description = capitalize_words(translate(&day.modal_condition_description));
        out.push_str(&format!(
            "  {}  {}  {}  {}\n",
            painter.paint(&format!("{:<14}", day.date_label), Role::Muted),
            icon,
            painter.paint(&format!("{:>4}°C", day.average_temperature_c), Role::Accent),
            description
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use wetter_core::{CurrentWeather, ForecastEntry};

    fn loaded_state() -> SessionState {
        SessionState {
            current: Some(CurrentWeather {
                city_name: "Berlin".into(),
                country_code: "DE".into(),
                temperature_c: 18.6,
                feels_like_c: 17.9,
                humidity_pct: 54,
                wind_speed_ms: 4.12,
                pressure_hpa: 1021,
                condition_code: 800,
                condition_description: "clear sky".into(),
            }),
            forecast: Some(vec![ForecastEntry {
                // 2024-10-14 12:00 UTC
                timestamp_unix: 1_728_907_200,
                temperature_c: 12.4,
                condition_code: 501,
                condition_description: "moderate rain".into(),
            }]),
            loading: false,
            error: None,
        }
    }

    #[test]
    fn current_tab_lists_all_detail_cards() {
        let out = screen(&loaded_state(), Some(Tab::Current), &Painter::plain(), &Utc);

        assert!(out.contains("[Aktuelles Wetter]"));
        assert!(out.contains("Berlin, DE"));
        assert!(out.contains("19°C"));
        assert!(out.contains("Klarer Himmel"));
        assert!(out.contains("Gefühlt wie"));
        assert!(out.contains("18°C"));
        assert!(out.contains("54%"));
        assert!(out.contains("4 m/s"));
        assert!(out.contains("1021 hPa"));
        assert!(!out.contains("Mäßiger Regen"));
    }

    #[test]
    fn forecast_tab_shows_day_cards() {
        let out = screen(&loaded_state(), Some(Tab::Forecast), &Painter::plain(), &Utc);

        assert!(out.contains("[5-Tage Vorhersage]"));
        assert!(out.contains("Mo., 14. Okt."));
        assert!(out.contains("12°C"));
        assert!(out.contains("Mäßiger Regen"));
        assert!(out.contains(WeatherIcon::Rain.glyph()));
    }

    #[test]
    fn no_tab_prints_both() {
        let out = screen(&loaded_state(), None, &Painter::plain(), &Utc);
        assert!(out.contains("Klarer Himmel"));
        assert!(out.contains("Mäßiger Regen"));
    }

    #[test]
    fn error_only_state_shows_banner_without_card() {
        let state = SessionState {
            error: Some("Stadt nicht gefunden oder API-Fehler".into()),
            ..Default::default()
        };

        let out = screen(&state, Some(Tab::Current), &Painter::plain(), &Utc);
        assert_eq!(out, "✖ Stadt nicht gefunden oder API-Fehler\n");
    }

    #[test]
    fn untranslated_description_is_capitalized() {
        let mut state = loaded_state();
        if let Some(forecast) = state.forecast.as_mut() {
            forecast[0].condition_description = "foo bar".into();
        }

        let out = screen(&state, Some(Tab::Forecast), &Painter::plain(), &Utc);
        assert!(out.contains("Foo Bar"));
    }

    #[test]
    fn colour_output_emits_escape_codes() {
        let painter = Painter::new(Theme::Dark, true);
        assert!(header(&painter).contains('\u{1b}'));
        assert!(!header(&Painter::plain()).contains('\u{1b}'));
        assert!(header(&Painter::plain()).contains("Design: Hell"));
    }
}

//! Interactive session: search field, tab switching and theme toggle.

use std::fmt;

use anyhow::Context;
use chrono::Local;
use inquire::{InquireError, Select, Text};
use tracing::debug;
use wetter_core::{
    Config, SearchForm, SessionState, WeatherSession, provider_from_config,
    search::{PLACEHOLDER, SearchInputError},
};

use crate::render::{self, Painter, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ShowTab(Tab),
    Search,
    ToggleTheme,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ShowTab(tab) => f.write_str(tab.title()),
            Action::Search => f.write_str("Neue Suche"),
            Action::ToggleTheme => f.write_str("Design wechseln"),
            Action::Quit => f.write_str("Beenden"),
        }
    }
}

/// Menu entries for the current state; tabs only exist once weather is loaded.
fn actions_for(state: &SessionState) -> Vec<Action> {
    let mut actions = Vec::new();
    if state.current.is_some() {
        actions.extend(Tab::ALL.map(Action::ShowTab));
    }
    actions.extend([Action::Search, Action::ToggleTheme, Action::Quit]);
    actions
}

pub async fn run(config: &Config, mut painter: Painter) -> anyhow::Result<()> {
    let session = WeatherSession::new(provider_from_config(config)?);
    let mut form = SearchForm::new();
    let mut tab = Tab::Current;
    let mut action = Action::Search;

    println!("{}", render::header(&painter));

    loop {
        match action {
            Action::Search => {
                let Some(city) = prompt_city(&mut form, &painter)? else {
                    break;
                };
                println!("{}", form.button_label());
                session.search(&city).await;
                form.settle();
                tab = Tab::Current;
            }
            Action::ShowTab(selected) => tab = selected,
            Action::ToggleTheme => {
                painter.theme = painter.theme.toggled();
                println!("{}", render::header(&painter));
            }
            Action::Quit => break,
        }

        let state = session.snapshot().await;
        println!();
        print!("{}", render::screen(&state, Some(tab), &painter, &Local));
        println!();

        action = match prompt_action(&state)? {
            Some(next) => next,
            None => break,
        };
    }

    Ok(())
}

/// Asks for a city until the input is valid. `None` when the user cancels.
fn prompt_city(form: &mut SearchForm, painter: &Painter) -> anyhow::Result<Option<String>> {
    loop {
        let input = Text::new("Stadt:")
            .with_placeholder(PLACEHOLDER)
            .with_initial_value(form.text())
            .prompt_skippable();

        let Some(text) = cancel_to_none(input)?.flatten() else {
            return Ok(None);
        };

        form.set_text(text);
        match form.submit() {
            Ok(city) => return Ok(Some(city)),
            Err(SearchInputError::Empty) => {
                println!("{}", render::error_banner(&SearchInputError::Empty.to_string(), painter));
            }
            Err(err @ SearchInputError::Busy) => {
                debug!(%err, "search form still submitting");
                form.settle();
            }
        }
    }
}

fn prompt_action(state: &SessionState) -> anyhow::Result<Option<Action>> {
    let choice = Select::new("Auswahl:", actions_for(state)).prompt();
    cancel_to_none(choice)
}

/// Esc and Ctrl-C end the session instead of failing it.
fn cancel_to_none<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Failed to read input"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wetter_core::CurrentWeather;

    #[test]
    fn without_weather_only_search_theme_and_quit_are_offered() {
        let actions = actions_for(&SessionState::default());
        assert_eq!(actions, vec![Action::Search, Action::ToggleTheme, Action::Quit]);
    }

    #[test]
    fn loaded_weather_adds_both_tabs_first() {
        let state = SessionState {
            current: Some(CurrentWeather {
                city_name: "Dresden".into(),
                country_code: "DE".into(),
                temperature_c: 8.0,
                feels_like_c: 6.0,
                humidity_pct: 90,
                wind_speed_ms: 1.0,
                pressure_hpa: 1015,
                condition_code: 741,
                condition_description: "fog".into(),
            }),
            ..Default::default()
        };

        let actions = actions_for(&state);
        assert_eq!(actions[0], Action::ShowTab(Tab::Current));
        assert_eq!(actions[1], Action::ShowTab(Tab::Forecast));
        assert_eq!(actions.len(), 5);
    }

    #[test]
    fn menu_labels_are_german() {
        assert_eq!(Action::ShowTab(Tab::Forecast).to_string(), "5-Tage Vorhersage");
        assert_eq!(Action::ToggleTheme.to_string(), "Design wechseln");
    }

    #[test]
    fn cancelled_prompt_ends_the_session() {
        let canceled: Result<String, InquireError> = Err(InquireError::OperationCanceled);
        assert!(cancel_to_none(canceled).unwrap().is_none());
    }
}

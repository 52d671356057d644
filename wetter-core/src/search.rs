//! City search input and its submit state.

use thiserror::Error;

pub const PLACEHOLDER: &str = "Stadtname eingeben...";
pub const SUBMIT_LABEL: &str = "Suchen";
pub const SUBMITTING_LABEL: &str = "Suche...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchInputError {
    #[error("Bitte einen Stadtnamen eingeben")]
    Empty,
    #[error("Eine Suche läuft bereits")]
    Busy,
}

/// Text field plus submit button. Both are disabled while a search runs.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    text: String,
    state: SearchState,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_input_enabled(&self) -> bool {
        self.state == SearchState::Idle
    }

    pub fn can_submit(&self) -> bool {
        self.is_input_enabled() && !self.text.trim().is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        match self.state {
            SearchState::Idle => SUBMIT_LABEL,
            SearchState::Submitting => SUBMITTING_LABEL,
        }
    }

    /// Replaces the input text. Ignored while a search is in flight.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        if !self.is_input_enabled() {
            return false;
        }
        self.text = text.into();
        true
    }

    /// Moves to `Submitting` and returns the trimmed city name.
    pub fn submit(&mut self) -> Result<String, SearchInputError> {
        if self.state == SearchState::Submitting {
            return Err(SearchInputError::Busy);
        }

        let city = self.text.trim();
        if city.is_empty() {
            return Err(SearchInputError::Empty);
        }

        let city = city.to_string();
        self.state = SearchState::Submitting;
        Ok(city)
    }

    /// Called once the search finished, successfully or not.
    pub fn settle(&mut self) {
        self.state = SearchState::Idle;
    }
}

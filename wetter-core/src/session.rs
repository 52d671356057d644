//! Fetch orchestration and the view state fed to the presentation layer.
//!
//! A search issues the current-weather request and then the forecast
//! request. Either failure clears both results and leaves one error
//! message. Every search takes a generation number; when it settles after
//! a newer search has started, its result is dropped.

use chrono::TimeZone;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{
    current::CurrentDisplay,
    error::FetchError,
    forecast::aggregate_daily,
    model::{CurrentWeather, DailySummary, ForecastEntry},
    provider::WeatherProvider,
};

/// What the presentation layer renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current: Option<CurrentWeather>,
    pub forecast: Option<Vec<ForecastEntry>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionState {
    pub fn current_display(&self) -> Option<CurrentDisplay> {
        self.current.as_ref().map(CurrentDisplay::from)
    }

    /// Daily cards for the forecast tab, `None` when there is nothing to show.
    pub fn daily_forecast<Tz: TimeZone>(&self, tz: &Tz) -> Option<Vec<DailySummary>> {
        self.forecast
            .as_deref()
            .filter(|entries| !entries.is_empty())
            .map(|entries| aggregate_daily(entries, tz))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Loaded,
    /// Carries the banner message that was set.
    Failed(&'static str),
    /// A newer search started before this one settled; nothing was written.
    Superseded,
}

#[derive(Debug, Default)]
struct Inner {
    view: SessionState,
    generation: u64,
}

#[derive(Debug)]
pub struct WeatherSession<P> {
    provider: P,
    inner: Mutex<Inner>,
}

impl<P: WeatherProvider> WeatherSession<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn snapshot(&self) -> SessionState {
        self.inner.lock().await.view.clone()
    }

    /// Looks up `city` and stores the result, unless a newer search wins.
    pub async fn search(&self, city: &str) -> SearchOutcome {
        let generation = self.begin().await;
        info!(city, generation, "searching");

        let result = self.fetch_both(city).await;
        self.finish(generation, result).await
    }

    async fn begin(&self) -> u64 {
        let mut inner = self.inner.lock().await;
        inner.generation += 1;
        inner.view.loading = true;
        inner.view.error = None;
        inner.generation
    }

    async fn fetch_both(
        &self,
        city: &str,
    ) -> Result<(CurrentWeather, Vec<ForecastEntry>), FetchError> {
        let current = self.provider.fetch_current(city).await?;
        let forecast = self.provider.fetch_forecast(city).await?;
        Ok((current, forecast))
    }

    async fn finish(
        &self,
        generation: u64,
        result: Result<(CurrentWeather, Vec<ForecastEntry>), FetchError>,
    ) -> SearchOutcome {
        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(generation, latest = inner.generation, "discarding superseded search result");
            return SearchOutcome::Superseded;
        }

        let view = &mut inner.view;
        view.loading = false;

        match result {
            Ok((current, forecast)) => {
                view.current = Some(current);
                view.forecast = Some(forecast);
                view.error = None;
                SearchOutcome::Loaded
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                let message = err.user_message();
                view.current = None;
                view.forecast = None;
                view.error = Some(message.to_string());
                SearchOutcome::Failed(message)
            }
        }
    }
}

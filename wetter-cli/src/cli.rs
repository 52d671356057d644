use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Password, PasswordDisplayMode, Select};
use wetter_core::{Config, SearchOutcome, Theme, WeatherSession, provider_from_config};

use crate::{
    app,
    render::{self, Painter, Tab},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wetter", version, about = "Wetter für eine Stadt nachschlagen")]
pub struct Cli {
    /// Colour palette, overriding the configured one.
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Print without colours.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and the default theme.
    Configure,

    /// Search interactively (the default).
    Interactive,

    /// Show the weather for a city and exit.
    Show {
        /// City name, e.g. "Berlin".
        city: String,

        /// Only print one tab; both when absent.
        #[arg(long, value_enum)]
        tab: Option<TabArg>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TabArg {
    Current,
    Forecast,
}

impl From<TabArg> for Tab {
    fn from(value: TabArg) -> Self {
        match value {
            TabArg::Current => Tab::Current,
            TabArg::Forecast => Tab::Forecast,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = Config::load()?;
        let painter = Painter::new(
            self.theme.map(Theme::from).unwrap_or(config.theme),
            config.color && !self.no_color,
        );

        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => {
                configure(config)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Interactive => {
                app::run(&config, painter).await?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Show { city, tab } => show(&config, painter, &city, tab.map(Tab::from)).await,
        }
    }
}

async fn show(
    config: &Config,
    painter: Painter,
    city: &str,
    tab: Option<Tab>,
) -> anyhow::Result<ExitCode> {
    let city = city.trim();
    if city.is_empty() {
        anyhow::bail!("City name must not be empty");
    }

    let session = WeatherSession::new(provider_from_config(config)?);
    let outcome = session.search(city).await;

    let state = session.snapshot().await;
    print!("{}", render::screen(&state, tab, &painter, &Local));

    Ok(match outcome {
        SearchOutcome::Loaded => ExitCode::SUCCESS,
        SearchOutcome::Failed(_) | SearchOutcome::Superseded => ExitCode::FAILURE,
    })
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API-Schlüssel:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        anyhow::bail!("API key must not be empty");
    }
    config.set_api_key(api_key.to_string());

    let theme = Select::new("Design:", vec![Theme::Light.label(), Theme::Dark.label()])
        .with_starting_cursor(usize::from(config.theme == Theme::Dark))
        .prompt()
        .context("Failed to read theme")?;
    config.theme = if theme == Theme::Dark.label() { Theme::Dark } else { Theme::Light };

    let path = config.save()?;
    println!("Konfiguration gespeichert: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["wetter"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn show_accepts_tab_and_global_theme() {
        let cli = Cli::try_parse_from(["wetter", "show", "Berlin", "--tab", "forecast", "--theme", "dark"])
            .unwrap();

        assert!(matches!(cli.theme, Some(ThemeArg::Dark)));
        match cli.command {
            Some(Command::Show { city, tab }) => {
                assert_eq!(city, "Berlin");
                assert!(matches!(tab, Some(TabArg::Forecast)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_tab_is_rejected() {
        assert!(Cli::try_parse_from(["wetter", "show", "Berlin", "--tab", "radar"]).is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

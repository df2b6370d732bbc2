use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use skyorb_core::{Config, OpenWeatherClient, WeatherPresenter};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "skyorb",
    version,
    about = "City weather with a map viewport and a glass sphere"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Look up current weather for a city and print the resulting views.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Reset the views to defaults, then look up the initial city (London).
    Init,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(Some(&city)).await,
            Command::Init => show(None).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key from the prompt")?;

    config.set_api_key(key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let api_key = config.resolve_api_key()?;

    let client = OpenWeatherClient::new(api_key);
    let mut presenter = WeatherPresenter::new(client);

    match city {
        Some(city) => presenter.submit_lookup(city).await,
        None => presenter.init().await,
    }

    render::print_views(&mut presenter);
    Ok(())
}

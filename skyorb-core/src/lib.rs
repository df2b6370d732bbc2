//! Core library for the `skyorb` weather viewer.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather lookup client and its failure taxonomy
//! - View models for the text panel, the map viewport and the glass sphere
//! - The presenter that coordinates them
//!
//! It is used by `skyorb-cli`, but any frontend that can render the view
//! models (a TUI, a GUI shell) can reuse it unchanged.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod view;

pub use client::{CurrentWeatherClient, openweather::OpenWeatherClient};
pub use config::Config;
pub use error::LookupError;
pub use model::{WeatherQuery, WeatherRecord};
pub use presenter::{LookupTicket, ViewState, WeatherPresenter};
pub use view::{map::MapView, panel::TextPanel, scene::ViewportScene};

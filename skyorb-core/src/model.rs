use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated city name, trimmed and guaranteed non-empty.
///
/// The only way to obtain one is [`WeatherQuery::parse`], so downstream code
/// (the client in particular) never re-validates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery(String);

impl WeatherQuery {
    /// Trim the raw input; `None` if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }

    pub fn city(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WeatherQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized result of one successful lookup.
///
/// All fields except `observed_at` are required on the wire; a response
/// missing any of them is classified as malformed before this type is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub observed_at: DateTime<Utc>,
}

impl WeatherRecord {
    /// Temperature rounded to the nearest whole degree for display.
    pub fn rounded_temperature(&self) -> i64 {
        self.temperature_c.round() as i64
    }
}

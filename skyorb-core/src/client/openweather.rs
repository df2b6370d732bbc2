use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::LookupError,
    model::{WeatherQuery, WeatherRecord},
};

use super::CurrentWeatherClient;

/// Production endpoint; tests point [`OpenWeatherClient::with_base_url`] at
/// a mock server instead.
pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, OPENWEATHER_BASE_URL.to_owned())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

/// `cod` arrives as a number on success and usually as a string on error;
/// both spellings of "200" count as success.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProviderStatus {
    Numeric(u16),
    Text(String),
}

impl ProviderStatus {
    fn is_ok(&self) -> bool {
        match self {
            ProviderStatus::Numeric(code) => *code == 200,
            ProviderStatus::Text(code) => code == "200",
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    cod: ProviderStatus,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    coord: OwCoord,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    dt: Option<i64>,
}

#[async_trait]
impl CurrentWeatherClient for OpenWeatherClient {
    async fn current_weather(
        &self,
        query: &WeatherQuery,
    ) -> Result<WeatherRecord, LookupError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        tracing::debug!(city = query.city(), "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.city()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let body = res.text().await?;

        // The provider reports its own status in the body; the HTTP status
        // line is not authoritative for this endpoint.
        let envelope: OwEnvelope = serde_json::from_str(&body)
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

        if !envelope.cod.is_ok() {
            tracing::debug!(city = query.city(), "provider reported unknown city");
            return Err(LookupError::NotFound);
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|e| {
            LookupError::MalformedResponse(format!(
                "{e} in body {}",
                truncate_body(&body)
            ))
        })?;

        let condition = parsed
            .weather
            .first()
            .map(|w| w.description.clone())
            .ok_or_else(|| {
                LookupError::MalformedResponse("empty `weather` array".to_owned())
            })?;

        let observed_at = parsed.dt.and_then(unix_to_utc).unwrap_or_else(Utc::now);

        Ok(WeatherRecord {
            city: parsed.name,
            latitude: parsed.coord.lat,
            longitude: parsed.coord.lon,
            temperature_c: parsed.main.temp,
            condition,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            observed_at,
        })
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // The cut must land on a char boundary or the slice panics on
        // multi-byte UTF-8 in the body.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_status_accepts_both_spellings_of_ok() {
        let num: OwEnvelope = serde_json::from_str(r#"{"cod":200}"#).unwrap();
        let text: OwEnvelope = serde_json::from_str(r#"{"cod":"200"}"#).unwrap();
        assert!(num.cod.is_ok());
        assert!(text.cod.is_ok());

        let err: OwEnvelope = serde_json::from_str(r#"{"cod":"404"}"#).unwrap();
        assert!(!err.cod.is_ok());
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let short = truncate_body(&long);
        assert!(short.len() < long.len());
        assert!(short.ends_with("..."));
        assert_eq!(truncate_body("tiny"), "tiny");
    }

    #[test]
    fn truncate_body_backs_off_to_a_char_boundary() {
        // A two-byte char straddling the 200-byte cap must not panic.
        let body = format!("{}{}", "x".repeat(199), "°".repeat(10));
        assert!(!body.is_char_boundary(200));

        let short = truncate_body(&body);
        assert!(short.ends_with("..."));
        assert_eq!(&short[..199], &body[..199]);
    }
}

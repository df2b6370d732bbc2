use crate::{
    error::LookupError,
    model::{WeatherQuery, WeatherRecord},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Seam between the presenter and whatever service answers a lookup.
///
/// One call, one response; no retry or caching on either side. Test code
/// substitutes scripted implementations here.
#[async_trait]
pub trait CurrentWeatherClient: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery)
    -> Result<WeatherRecord, LookupError>;
}

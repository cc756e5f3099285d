//! Weather provider abstraction
//!
//! Weather lookups are best-effort: the workflow treats any failure here as
//! non-fatal and degrades to a fallback advisory, so provider errors must be
//! `WeatherUnavailable` and never anything the caller would abort on.

use async_trait::async_trait;

use crate::Result;
use crate::models::{Coordinate, WeatherSnapshot};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// A weather service that reports current conditions at a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current weather code and temperature for a location.
    async fn current(&self, location: &Coordinate) -> Result<WeatherSnapshot>;
}

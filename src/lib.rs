//! `RouteWise` - Trip planning and travel advisory service
//!
//! This library provides the core workflow for planning a trip between two
//! coordinates: input validation, route planning via pluggable external
//! providers, weather-based travel advisories, and report assembly.

pub mod advisory;
pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod map;
pub mod models;
pub mod planner;
pub mod report;
pub mod routing;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use advisory::Advisory;
pub use config::RouteWiseConfig;
pub use error::RouteWiseError;
pub use map::{MapMarker, MapView, MarkerColor};
pub use models::{Coordinate, RouteRequest, RouteResult, TravelMode, WeatherSnapshot};
pub use planner::{TripPlan, TripPlanner, TripRequest};
pub use routing::{GraphHopperProvider, OsrmProvider, RoutingProvider};
pub use weather::{OpenMeteoProvider, WeatherProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RouteWiseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}

//! Core data models shared across the planning workflow

pub mod coordinate;
pub mod route;
pub mod weather;

pub use coordinate::Coordinate;
pub use route::{RouteRequest, RouteResult, TravelMode};
pub use weather::{WeatherSnapshot, weather_code_to_description};

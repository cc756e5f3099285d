//! Route request and result models

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Travel mode for a trip
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Cycling,
    Walking,
}

impl TravelMode {
    /// Profile name used by OSRM path-based URLs
    #[must_use]
    pub fn osrm_profile(&self) -> &'static str {
        match self {
            TravelMode::Driving => "driving",
            TravelMode::Cycling => "cycling",
            TravelMode::Walking => "walking",
        }
    }

    /// Profile name used by the GraphHopper directions API
    #[must_use]
    pub fn graphhopper_profile(&self) -> &'static str {
        match self {
            TravelMode::Driving => "car",
            TravelMode::Cycling => "bike",
            TravelMode::Walking => "foot",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelMode::Driving => write!(f, "driving"),
            TravelMode::Cycling => write!(f, "cycling"),
            TravelMode::Walking => write!(f, "walking"),
        }
    }
}

/// A single routing request: validated stops plus provider options
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: TravelMode,
    /// Intermediate stops, visited in input order between origin and destination
    pub waypoints: Vec<Coordinate>,
    /// Forwarded to providers that support it; ignored elsewhere
    pub avoid_highways: bool,
}

impl RouteRequest {
    #[must_use]
    pub fn new(origin: Coordinate, destination: Coordinate, mode: TravelMode) -> Self {
        Self {
            origin,
            destination,
            mode,
            waypoints: Vec::new(),
            avoid_highways: false,
        }
    }

    #[must_use]
    pub fn with_waypoints(mut self, waypoints: Vec<Coordinate>) -> Self {
        self.waypoints = waypoints;
        self
    }

    #[must_use]
    pub fn with_avoid_highways(mut self, avoid_highways: bool) -> Self {
        self.avoid_highways = avoid_highways;
        self
    }

    /// All stops in provider order: origin, waypoints in input order, destination
    #[must_use]
    pub fn stops(&self) -> Vec<Coordinate> {
        let mut stops = Vec::with_capacity(self.waypoints.len() + 2);
        stops.push(self.origin);
        stops.extend(self.waypoints.iter().copied());
        stops.push(self.destination);
        stops
    }
}

/// A planned route returned by a routing provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteResult {
    /// Route length in kilometers
    pub distance_km: f64,
    /// Estimated travel time in minutes
    pub duration_min: f64,
    /// Path polyline in travel order, longitude/latitude pairs
    pub geometry: Vec<Coordinate>,
}

impl RouteResult {
    /// Build a result from raw provider units (meters and seconds)
    #[must_use]
    pub fn from_provider_units(distance_m: f64, duration_s: f64, geometry: Vec<Coordinate>) -> Self {
        Self {
            distance_km: distance_m / 1000.0,
            duration_min: duration_s / 60.0,
            geometry,
        }
    }

    /// Format the distance for display, e.g. "1.20 km"
    #[must_use]
    pub fn format_distance(&self) -> String {
        format!("{:.2} km", self.distance_km)
    }

    /// Format the duration for display, e.g. "5.0 minutes"
    #[must_use]
    pub fn format_duration(&self) -> String {
        format!("{:.1} minutes", self.duration_min)
    }
}

//! Coordinate model: validated longitude/latitude pairs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouteWiseError;

/// A validated geographic coordinate.
///
/// Parsed from user input in "longitude,latitude" order and immutable once
/// validated. Longitude is bounded to [-180, 180], latitude to [-90, 90].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Latitude in decimal degrees
    pub latitude: f64,
}

impl Coordinate {
    /// Create a coordinate without range checking.
    ///
    /// Intended for provider responses, which are trusted to stay in range.
    /// User input goes through `FromStr`.
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Format as "longitude,latitude" for provider URLs
    #[must_use]
    pub fn format_lon_lat(&self) -> String {
        format!("{},{}", self.longitude, self.latitude)
    }

    /// Format as "latitude,longitude" for providers with lat-first order
    #[must_use]
    pub fn format_lat_lon(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

impl FromStr for Coordinate {
    type Err = RouteWiseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();

        if parts.len() != 2 {
            return Err(RouteWiseError::invalid_format(format!(
                "expected two comma-separated fields, got {}",
                parts.len()
            )));
        }

        let longitude = parts[0].parse::<f64>().map_err(|_| {
            RouteWiseError::invalid_format(format!("longitude '{}' is not a number", parts[0]))
        })?;
        let latitude = parts[1].parse::<f64>().map_err(|_| {
            RouteWiseError::invalid_format(format!("latitude '{}' is not a number", parts[1]))
        })?;

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(RouteWiseError::out_of_range(format!(
                "longitude must be between -180 and 180, got {longitude}"
            )));
        }

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(RouteWiseError::out_of_range(format!(
                "latitude must be between -90 and 90, got {latitude}"
            )));
        }

        Ok(Self {
            longitude,
            latitude,
        })
    }
}

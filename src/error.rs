//! Error types and handling for the `RouteWise` application

use thiserror::Error;

/// Main error type for the `RouteWise` application
#[derive(Error, Debug)]
pub enum RouteWiseError {
    /// Coordinate input that does not parse as "longitude,latitude"
    #[error("Invalid coordinate format: {message}")]
    InvalidFormat { message: String },

    /// Coordinate input outside the valid longitude/latitude ranges
    #[error("Coordinate out of range: {message}")]
    OutOfRange { message: String },

    /// Routing provider could not be reached (after retries)
    #[error("Routing service unavailable: {message}")]
    RoutingUnavailable { message: String },

    /// Routing provider answered but found no route between the points
    #[error("No route found: {message}")]
    Unroutable { message: String },

    /// Weather provider could not be reached (after retries)
    #[error("Weather service unavailable: {message}")]
    WeatherUnavailable { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RouteWiseError {
    /// Create a new invalid-format validation error
    pub fn invalid_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    /// Create a new out-of-range validation error
    pub fn out_of_range<S: Into<String>>(message: S) -> Self {
        Self::OutOfRange {
            message: message.into(),
        }
    }

    /// Create a new routing transport error
    pub fn routing_unavailable<S: Into<String>>(message: S) -> Self {
        Self::RoutingUnavailable {
            message: message.into(),
        }
    }

    /// Create a new no-route error
    pub fn unroutable<S: Into<String>>(message: S) -> Self {
        Self::Unroutable {
            message: message.into(),
        }
    }

    /// Create a new weather transport error
    pub fn weather_unavailable<S: Into<String>>(message: S) -> Self {
        Self::WeatherUnavailable {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Weather errors degrade to a fallback advisory; everything else stops
    /// the workflow before a map or report is produced.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        !matches!(self, RouteWiseError::WeatherUnavailable { .. })
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RouteWiseError::InvalidFormat { message } => {
                format!("Invalid coordinates: {message}. Expected \"longitude,latitude\", e.g. 116.39139,39.9075.")
            }
            RouteWiseError::OutOfRange { message } => {
                format!("Coordinates out of range: {message}. Longitude must be -180..180, latitude -90..90.")
            }
            RouteWiseError::RoutingUnavailable { .. } => {
                "Unable to reach the routing service. Please check your internet connection and try again."
                    .to_string()
            }
            RouteWiseError::Unroutable { .. } => {
                "No route could be found between the given points. Please check the coordinates."
                    .to_string()
            }
            RouteWiseError::WeatherUnavailable { .. } => {
                "Weather data is unavailable right now. The route is shown without travel advice."
                    .to_string()
            }
            RouteWiseError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            RouteWiseError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

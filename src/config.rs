//! Configuration management for the `RouteWise` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::RouteWiseError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `RouteWise` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RouteWiseConfig {
    /// Outbound HTTP settings shared by all provider clients
    #[serde(default)]
    pub http: HttpConfig,
    /// Routing provider configuration
    #[serde(default)]
    pub routing: RoutingConfig,
    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Outbound HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u32,
    /// Maximum attempts per call, counting the initial request
    #[serde(default = "default_http_max_attempts")]
    pub max_attempts: u32,
    /// Fixed delay between attempts in milliseconds
    #[serde(default = "default_http_retry_delay")]
    pub retry_delay_ms: u32,
    /// Feature toggle: disabling retries leaves success-path behavior identical
    #[serde(default = "default_http_retries_enabled")]
    pub retries_enabled: bool,
}

/// Selectable routing provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoutingProviderKind {
    /// Path-based public routing service, no API key
    Osrm,
    /// Key-authenticated directions service with waypoint and avoid support
    Graphhopper,
}

/// Routing provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Which provider to plan routes with
    #[serde(default = "default_routing_provider")]
    pub provider: RoutingProviderKind,
    /// Base URL for the OSRM service
    #[serde(default = "default_osrm_base_url")]
    pub osrm_base_url: String,
    /// Base URL for the GraphHopper service
    #[serde(default = "default_graphhopper_base_url")]
    pub graphhopper_base_url: String,
    /// API key, required when the GraphHopper provider is selected
    pub api_key: Option<String>,
}

/// Weather provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the Open-Meteo forecast API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the JSON API listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

// Default value functions
fn default_http_timeout() -> u32 {
    10
}

fn default_http_max_attempts() -> u32 {
    3
}

fn default_http_retry_delay() -> u32 {
    2000
}

fn default_http_retries_enabled() -> bool {
    true
}

fn default_routing_provider() -> RoutingProviderKind {
    RoutingProviderKind::Osrm
}

fn default_osrm_base_url() -> String {
    "https://router.project-osrm.org".to_string()
}

fn default_graphhopper_base_url() -> String {
    "https://graphhopper.com/api/1".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_server_port() -> u16 {
    8080
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_http_timeout(),
            max_attempts: default_http_max_attempts(),
            retry_delay_ms: default_http_retry_delay(),
            retries_enabled: default_http_retries_enabled(),
        }
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            provider: default_routing_provider(),
            osrm_base_url: default_osrm_base_url(),
            graphhopper_base_url: default_graphhopper_base_url(),
            api_key: None,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl RouteWiseConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with ROUTEWISE_ prefix
        builder = builder.add_source(
            Environment::with_prefix("ROUTEWISE")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: RouteWiseConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("routewise").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_provider_selection()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the routing provider selection and its credentials
    fn validate_provider_selection(&self) -> Result<()> {
        if self.routing.provider == RoutingProviderKind::Graphhopper {
            match &self.routing.api_key {
                Some(key) if !key.is_empty() => {}
                _ => {
                    return Err(RouteWiseError::config(
                        "GraphHopper routing requires routing.api_key to be set",
                    )
                    .into());
                }
            }
        }

        if let Some(api_key) = &self.routing.api_key {
            if !api_key.is_empty() && api_key.len() < 8 {
                return Err(RouteWiseError::config(
                    "Routing API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.http.timeout_seconds == 0 || self.http.timeout_seconds > 300 {
            return Err(
                RouteWiseError::config("HTTP timeout must be between 1 and 300 seconds").into(),
            );
        }

        if self.http.max_attempts == 0 || self.http.max_attempts > 10 {
            return Err(
                RouteWiseError::config("HTTP max attempts must be between 1 and 10").into(),
            );
        }

        if self.http.retry_delay_ms > 60_000 {
            return Err(
                RouteWiseError::config("HTTP retry delay cannot exceed 60000 ms").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(RouteWiseError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        for (name, url) in [
            ("routing.osrm_base_url", &self.routing.osrm_base_url),
            (
                "routing.graphhopper_base_url",
                &self.routing.graphhopper_base_url,
            ),
            ("weather.base_url", &self.weather.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(RouteWiseError::config(format!(
                    "{name} must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouteWiseConfig::default();
        assert_eq!(config.http.timeout_seconds, 10);
        assert_eq!(config.http.max_attempts, 3);
        assert_eq!(config.http.retry_delay_ms, 2000);
        assert!(config.http.retries_enabled);
        assert_eq!(config.routing.provider, RoutingProviderKind::Osrm);
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.logging.level, "info");
        assert!(config.routing.api_key.is_none());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = RouteWiseConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_graphhopper_requires_api_key() {
        let mut config = RouteWiseConfig::default();
        config.routing.provider = RoutingProviderKind::Graphhopper;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("api_key"));

        config.routing.api_key = Some("valid_api_key_123".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = RouteWiseConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = RouteWiseConfig::default();
        config.http.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));

        let mut config = RouteWiseConfig::default();
        config.http.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_base_urls() {
        let mut config = RouteWiseConfig::default();
        config.weather.base_url = "ftp://weather.example".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("weather.base_url"));
    }

    #[test]
    fn test_provider_kind_deserializes_lowercase() {
        let kind: RoutingProviderKind = serde_json::from_str("\"osrm\"").unwrap();
        assert_eq!(kind, RoutingProviderKind::Osrm);
        let kind: RoutingProviderKind = serde_json::from_str("\"graphhopper\"").unwrap();
        assert_eq!(kind, RoutingProviderKind::Graphhopper);
    }

    #[test]
    fn test_config_path_generation() {
        let path = RouteWiseConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("routewise"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}

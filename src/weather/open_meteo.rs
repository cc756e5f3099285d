//! Open-Meteo weather provider (no API key required)

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::Result;
use crate::error::RouteWiseError;
use crate::models::{Coordinate, WeatherSnapshot};
use crate::weather::WeatherProvider;

pub struct OpenMeteoProvider {
    client: ClientWithMiddleware,
    base_url: String,
}

impl OpenMeteoProvider {
    #[must_use]
    pub fn new(client: ClientWithMiddleware, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn current_weather_url(&self, location: &Coordinate) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true",
            self.base_url, location.latitude, location.longitude
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    #[instrument(skip(self, location))]
    async fn current(&self, location: &Coordinate) -> Result<WeatherSnapshot> {
        let url = self.current_weather_url(location);
        debug!("Open-Meteo request URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            RouteWiseError::weather_unavailable(format!("Open-Meteo request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteWiseError::weather_unavailable(format!(
                "Open-Meteo returned HTTP {status}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            RouteWiseError::weather_unavailable(format!("failed to read Open-Meteo response: {e}"))
        })?;

        parse_current_response(&body)
    }
}

/// Parse an Open-Meteo forecast response into a `WeatherSnapshot`
fn parse_current_response(body: &str) -> Result<WeatherSnapshot> {
    let response: ForecastResponse = serde_json::from_str(body).map_err(|e| {
        RouteWiseError::weather_unavailable(format!("invalid Open-Meteo response: {e}"))
    })?;

    let current = response.current_weather.ok_or_else(|| {
        RouteWiseError::weather_unavailable("no current weather in Open-Meteo response")
    })?;

    Ok(WeatherSnapshot {
        code: current.weather_code,
        temperature_c: current.temperature,
    })
}

/// Current weather object from the Open-Meteo forecast endpoint
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    #[serde(rename = "weathercode")]
    weather_code: i32,
    /// Temperature in Celsius
    temperature: f64,
}

//! Travel advisory engine
//!
//! Three independent, order-fixed threshold rules derive canned guidance from
//! the current weather and the planned route: precipitation, temperature
//! band, and congestion. The rules never short-circuit each other; the
//! result is always all three records, or the single fallback record when
//! weather data is unavailable.
//!
//! The congestion rule uses the wall-clock local hour at evaluation time
//! rather than a user-declared departure time. Known limitation: advice for
//! a trip planned ahead reflects conditions now, not at departure.

use serde::{Deserialize, Serialize};

use crate::models::{RouteResult, WeatherSnapshot};

/// WMO codes at or above this value are rain/snow categories
pub const PRECIPITATION_CODE_THRESHOLD: i32 = 51;

/// Above this temperature the clothing advice switches to hot-weather gear
pub const HOT_TEMPERATURE_C: f64 = 30.0;

/// Below this temperature the clothing advice switches to cold-weather gear
pub const COLD_TEMPERATURE_C: f64 = 5.0;

/// Local clock hours treated as high-congestion
pub const PEAK_HOURS: [u32; 6] = [7, 8, 9, 17, 18, 19];

/// Routes longer than this are flagged regardless of hour
pub const LONG_DISTANCE_KM: f64 = 10.0;

/// One advisory record: which rule fired, the matched condition, and the
/// recommendation text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advisory {
    /// Decision branch label
    pub branch: String,
    /// Description of the matched condition
    pub condition: String,
    /// Recommendation text
    pub recommendation: String,
}

impl Advisory {
    fn new(branch: &str, condition: impl Into<String>, recommendation: impl Into<String>) -> Self {
        Self {
            branch: branch.to_string(),
            condition: condition.into(),
            recommendation: recommendation.into(),
        }
    }
}

/// Evaluate all three rules in fixed order.
///
/// `local_hour` is the local wall-clock hour (0-23) at evaluation time.
#[must_use]
pub fn evaluate(weather: &WeatherSnapshot, route: &RouteResult, local_hour: u32) -> Vec<Advisory> {
    vec![
        precipitation_rule(weather),
        temperature_rule(weather),
        congestion_rule(route, local_hour),
    ]
}

/// Single record returned when weather data could not be fetched
#[must_use]
pub fn fallback() -> Vec<Advisory> {
    vec![Advisory::new(
        "weather",
        "weather data unavailable",
        "Weather data is unavailable, travel guidance could not be generated.",
    )]
}

/// Rule 1: rain/snow weather codes suggest delaying or public transit
fn precipitation_rule(weather: &WeatherSnapshot) -> Advisory {
    if weather.code >= PRECIPITATION_CODE_THRESHOLD {
        Advisory::new(
            "precipitation",
            format!("weather code >= {PRECIPITATION_CODE_THRESHOLD}"),
            "Rain or snow expected, consider delaying the trip or taking public transit.",
        )
    } else {
        Advisory::new(
            "precipitation",
            "no rain or snow",
            "Weather is suitable for travel.",
        )
    }
}

/// Rule 2: clothing advice by temperature band, bounds exclusive on both sides
fn temperature_rule(weather: &WeatherSnapshot) -> Advisory {
    if weather.temperature_c > HOT_TEMPERATURE_C {
        Advisory::new(
            "clothing",
            format!("temperature > {HOT_TEMPERATURE_C}°C"),
            "High temperature, wear light clothing and bring sun protection.",
        )
    } else if weather.temperature_c < COLD_TEMPERATURE_C {
        Advisory::new(
            "clothing",
            format!("temperature < {COLD_TEMPERATURE_C}°C"),
            "Low temperature, wear warm clothing.",
        )
    } else {
        Advisory::new(
            "clothing",
            format!("{COLD_TEMPERATURE_C}°C <= temperature <= {HOT_TEMPERATURE_C}°C"),
            "Comfortable temperature, normal clothing is fine.",
        )
    }
}

/// Rule 3: peak hour or a long route suggests traveling off-peak
fn congestion_rule(route: &RouteResult, local_hour: u32) -> Advisory {
    let is_peak_hour = PEAK_HOURS.contains(&local_hour);
    let is_long_distance = route.distance_km > LONG_DISTANCE_KM;

    if is_peak_hour || is_long_distance {
        Advisory::new(
            "congestion",
            format!("peak hour or distance > {LONG_DISTANCE_KM} km"),
            "Peak hours or a long route, prefer traveling off-peak (10:00-16:00).",
        )
    } else {
        Advisory::new(
            "congestion",
            "off-peak and short distance",
            "Traffic conditions are favorable for travel.",
        )
    }
}

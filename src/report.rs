//! Plain-text trip report assembly
//!
//! The report is built in memory and handed to the transport layer as a
//! UTF-8 string; persisting it (if at all) is the caller's concern.

use crate::advisory::Advisory;
use crate::models::{RouteResult, TravelMode, WeatherSnapshot};

/// Title line of every report
pub const REPORT_TITLE: &str = "RouteWise Trip Report";

/// Render the downloadable report.
///
/// `start` and `end` are the raw user inputs, echoed back verbatim. The
/// weather line is present only when a snapshot is available.
#[must_use]
pub fn render(
    start: &str,
    end: &str,
    mode: TravelMode,
    route: &RouteResult,
    weather: Option<&WeatherSnapshot>,
    advisories: &[Advisory],
) -> String {
    let mut report = String::new();

    report.push_str(REPORT_TITLE);
    report.push_str("\n\n");
    report.push_str(&format!("Start: {start}\n"));
    report.push_str(&format!("End: {end}\n"));
    report.push_str(&format!("Mode: {mode}\n"));
    report.push_str(&format!("Distance: {}\n", route.format_distance()));
    report.push_str(&format!("Duration: {}\n", route.format_duration()));
    if let Some(snapshot) = weather {
        report.push_str(&format!(
            "Weather: {}, {}\n",
            snapshot.description(),
            snapshot.format_temperature()
        ));
    }
    report.push('\n');
    report.push_str("Travel advisories:\n");
    for advisory in advisories {
        report.push_str(&format!("- {}\n", advisory.recommendation));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisory;
    use crate::models::Coordinate;

    fn test_route() -> RouteResult {
        RouteResult::from_provider_units(
            1200.0,
            300.0,
            vec![
                Coordinate::new(116.39139, 39.9075),
                Coordinate::new(116.3975, 39.9087),
            ],
        )
    }

    #[test]
    fn test_report_with_weather() {
        let weather = WeatherSnapshot {
            code: 1,
            temperature_c: 12.3,
        };
        let advisories = advisory::evaluate(&weather, &test_route(), 12);
        let report = render(
            "116.39139,39.9075",
            "116.3975,39.9087",
            TravelMode::Driving,
            &test_route(),
            Some(&weather),
            &advisories,
        );

        assert!(report.starts_with(REPORT_TITLE));
        assert!(report.contains("Start: 116.39139,39.9075"));
        assert!(report.contains("End: 116.3975,39.9087"));
        assert!(report.contains("Mode: driving"));
        assert!(report.contains("Distance: 1.20 km"));
        assert!(report.contains("Duration: 5.0 minutes"));
        assert!(report.contains("Weather: Mainly clear, 12.3°C"));
        assert_eq!(report.matches("\n- ").count(), 3);
    }

    #[test]
    fn test_report_without_weather_omits_weather_line() {
        let advisories = advisory::fallback();
        let report = render(
            "116.39139,39.9075",
            "116.3975,39.9087",
            TravelMode::Walking,
            &test_route(),
            None,
            &advisories,
        );

        assert!(!report.contains("Weather:"));
        assert!(report.contains("Mode: walking"));
        assert_eq!(report.matches("\n- ").count(), 1);
        assert!(report.contains("- Weather data is unavailable"));
    }
}

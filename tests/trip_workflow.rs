//! End-to-end tests for the trip planning workflow with mock providers

use async_trait::async_trait;

use routewise::error::RouteWiseError;
use routewise::models::{Coordinate, RouteRequest, RouteResult, TravelMode, WeatherSnapshot};
use routewise::planner::{TripPlanner, TripRequest};
use routewise::routing::RoutingProvider;
use routewise::weather::WeatherProvider;
use routewise::{MarkerColor, Result};

const START: &str = "116.39139,39.9075";
const END: &str = "116.3975,39.9087";

/// Routing provider that answers like OSRM would for a 1200 m / 300 s route
struct FixedRouting;

#[async_trait]
impl RoutingProvider for FixedRouting {
    async fn plan_route(&self, request: &RouteRequest) -> Result<RouteResult> {
        let mut geometry = vec![request.origin];
        geometry.extend(request.waypoints.iter().copied());
        geometry.push(request.destination);
        Ok(RouteResult::from_provider_units(1200.0, 300.0, geometry))
    }
}

/// Routing provider that answers but finds no route
struct UnroutableRouting;

#[async_trait]
impl RoutingProvider for UnroutableRouting {
    async fn plan_route(&self, _request: &RouteRequest) -> Result<RouteResult> {
        Err(RouteWiseError::unroutable("no route candidates"))
    }
}

/// Routing provider that cannot be reached
struct UnreachableRouting;

#[async_trait]
impl RoutingProvider for UnreachableRouting {
    async fn plan_route(&self, _request: &RouteRequest) -> Result<RouteResult> {
        Err(RouteWiseError::routing_unavailable("connection timed out"))
    }
}

/// Weather provider with a fixed mild, dry snapshot
struct FixedWeather;

#[async_trait]
impl WeatherProvider for FixedWeather {
    async fn current(&self, _location: &Coordinate) -> Result<WeatherSnapshot> {
        Ok(WeatherSnapshot {
            code: 2,
            temperature_c: 18.5,
        })
    }
}

/// Weather provider whose transport always fails
struct UnreachableWeather;

#[async_trait]
impl WeatherProvider for UnreachableWeather {
    async fn current(&self, _location: &Coordinate) -> Result<WeatherSnapshot> {
        Err(RouteWiseError::weather_unavailable("connection timed out"))
    }
}

fn planner(routing: impl RoutingProvider + 'static, weather: impl WeatherProvider + 'static) -> TripPlanner {
    TripPlanner::new(Box::new(routing), Box::new(weather))
}

fn driving_request() -> TripRequest {
    TripRequest {
        start: START.to_string(),
        end: END.to_string(),
        mode: TravelMode::Driving,
        waypoint: None,
        avoid_highways: false,
    }
}

#[tokio::test]
async fn plan_produces_converted_units_in_report() {
    let plan = planner(FixedRouting, FixedWeather)
        .plan(&driving_request())
        .await
        .unwrap();

    assert_eq!(plan.route.distance_km, 1.2);
    assert_eq!(plan.route.duration_min, 5.0);
    assert!(plan.report.contains("Distance: 1.20 km"));
    assert!(plan.report.contains("Duration: 5.0 minutes"));
    assert!(plan.report.contains(&format!("Start: {START}")));
    assert!(plan.report.contains(&format!("End: {END}")));
}

#[tokio::test]
async fn plan_with_weather_yields_three_advisories() {
    let plan = planner(FixedRouting, FixedWeather)
        .plan(&driving_request())
        .await
        .unwrap();

    assert!(plan.weather.is_some());
    assert_eq!(plan.advisories.len(), 3);
    assert_eq!(plan.advisories[0].branch, "precipitation");
    assert_eq!(plan.advisories[1].branch, "clothing");
    assert_eq!(plan.advisories[2].branch, "congestion");
    assert!(plan.report.contains("Weather: Partly cloudy, 18.5°C"));
}

#[tokio::test]
async fn weather_failure_degrades_but_still_plans() {
    let result = planner(FixedRouting, UnreachableWeather)
        .plan(&driving_request())
        .await;

    // No error escapes: the route and map are still presented.
    let plan = result.unwrap();
    assert!(plan.weather.is_none());
    assert_eq!(plan.advisories.len(), 1);
    assert!(plan.advisories[0].recommendation.contains("unavailable"));
    assert!(plan.report.contains("Distance: 1.20 km"));
    assert!(!plan.report.contains("Weather:"));
}

#[tokio::test]
async fn routing_failure_is_fatal() {
    let result = planner(UnreachableRouting, FixedWeather)
        .plan(&driving_request())
        .await;
    assert!(matches!(
        result,
        Err(RouteWiseError::RoutingUnavailable { .. })
    ));

    let result = planner(UnroutableRouting, FixedWeather)
        .plan(&driving_request())
        .await;
    assert!(matches!(result, Err(RouteWiseError::Unroutable { .. })));
}

#[tokio::test]
async fn invalid_input_fails_before_any_provider_call() {
    let planner = planner(UnreachableRouting, UnreachableWeather);

    let mut request = driving_request();
    request.start = "not-a-coordinate".to_string();
    let result = planner.plan(&request).await;
    assert!(matches!(result, Err(RouteWiseError::InvalidFormat { .. })));

    let mut request = driving_request();
    request.end = "200,39.9".to_string();
    let result = planner.plan(&request).await;
    assert!(matches!(result, Err(RouteWiseError::OutOfRange { .. })));

    let mut request = driving_request();
    request.waypoint = Some("116.4".to_string());
    let result = planner.plan(&request).await;
    assert!(matches!(result, Err(RouteWiseError::InvalidFormat { .. })));
}

#[tokio::test]
async fn map_view_marks_stops_and_path() {
    let mut request = driving_request();
    request.waypoint = Some("116.394,39.908".to_string());

    let plan = planner(FixedRouting, FixedWeather).plan(&request).await.unwrap();

    assert_eq!(plan.map.markers.len(), 3);
    assert_eq!(plan.map.markers[0].color, MarkerColor::Green);
    assert_eq!(plan.map.markers[1].color, MarkerColor::Orange);
    assert_eq!(plan.map.markers[2].color, MarkerColor::Red);
    assert_eq!(plan.map.path_color, "blue");

    // Path follows the route geometry in travel order.
    assert_eq!(plan.map.path.len(), 3);
    assert_eq!(plan.map.path[0], Coordinate::new(116.39139, 39.9075));
    assert_eq!(plan.map.path[1], Coordinate::new(116.394, 39.908));
    assert_eq!(plan.map.path[2], Coordinate::new(116.3975, 39.9087));
}

#[tokio::test]
async fn planning_is_stateless_across_invocations() {
    let planner = planner(FixedRouting, FixedWeather);
    let first = planner.plan(&driving_request()).await.unwrap();
    let second = planner.plan(&driving_request()).await.unwrap();

    assert_eq!(first.route, second.route);
    assert_eq!(first.map, second.map);
}

//! GraphHopper routing provider
//!
//! Key-authenticated directions API. Stops go as repeated `point=lat,lon`
//! query parameters in visit order; `points_encoded=false` requests plain
//! GeoJSON geometry. Unlike OSRM, GraphHopper reports "no route" as an
//! HTTP 400 with a message body.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::Result;
use crate::error::RouteWiseError;
use crate::models::{Coordinate, RouteRequest, RouteResult};
use crate::routing::RoutingProvider;

pub struct GraphHopperProvider {
    client: ClientWithMiddleware,
    base_url: String,
    api_key: String,
}

impl GraphHopperProvider {
    #[must_use]
    pub fn new(client: ClientWithMiddleware, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    fn route_url(&self, request: &RouteRequest) -> String {
        let points = request
            .stops()
            .iter()
            .map(|stop| format!("point={}", stop.format_lat_lon()))
            .collect::<Vec<_>>()
            .join("&");

        let mut url = format!(
            "{}/route?{}&profile={}&points_encoded=false&key={}",
            self.base_url,
            points,
            request.mode.graphhopper_profile(),
            urlencoding::encode(&self.api_key)
        );

        if request.avoid_highways {
            // avoid requires the flexible (non-contracted) routing mode
            url.push_str("&ch.disable=true&avoid=motorway");
        }

        url
    }
}

#[async_trait]
impl RoutingProvider for GraphHopperProvider {
    #[instrument(skip(self, request))]
    async fn plan_route(&self, request: &RouteRequest) -> Result<RouteResult> {
        let url = self.route_url(request);
        debug!("GraphHopper request for {} stops", request.stops().len());

        let response = self.client.get(&url).send().await.map_err(|e| {
            RouteWiseError::routing_unavailable(format!("GraphHopper request failed: {e}"))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            RouteWiseError::routing_unavailable(format!(
                "failed to read GraphHopper response: {e}"
            ))
        })?;

        if status.as_u16() == 400 {
            return Err(RouteWiseError::unroutable(format!(
                "GraphHopper could not find a route: {}",
                error_message(&body)
            )));
        }
        if !status.is_success() {
            return Err(RouteWiseError::routing_unavailable(format!(
                "GraphHopper returned HTTP {status}: {}",
                error_message(&body)
            )));
        }

        parse_route_response(&body)
    }
}

/// Best-effort extraction of the `message` field from an error body
fn error_message(body: &str) -> String {
    serde_json::from_str::<GraphHopperError>(body)
        .map(|e| e.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}

/// Parse a GraphHopper route response body into a `RouteResult`
fn parse_route_response(body: &str) -> Result<RouteResult> {
    let response: GraphHopperResponse = serde_json::from_str(body).map_err(|e| {
        RouteWiseError::routing_unavailable(format!("invalid GraphHopper response: {e}"))
    })?;

    let path = response
        .paths
        .into_iter()
        .next()
        .ok_or_else(|| RouteWiseError::unroutable("GraphHopper returned no paths"))?;

    let geometry = path
        .points
        .coordinates
        .into_iter()
        .map(|[longitude, latitude]| Coordinate::new(longitude, latitude))
        .collect();

    // GraphHopper reports distance in meters and time in milliseconds
    Ok(RouteResult::from_provider_units(
        path.distance,
        path.time as f64 / 1000.0,
        geometry,
    ))
}

#[derive(Debug, Deserialize)]
struct GraphHopperResponse {
    #[serde(default)]
    paths: Vec<GraphHopperPath>,
}

#[derive(Debug, Deserialize)]
struct GraphHopperPath {
    distance: f64,
    time: u64,
    points: GraphHopperPoints,
}

/// GeoJSON LineString, coordinates in longitude/latitude order
#[derive(Debug, Deserialize)]
struct GraphHopperPoints {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
struct GraphHopperError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::http;
    use crate::models::TravelMode;

    fn test_provider() -> GraphHopperProvider {
        let client = http::build_client(&HttpConfig::default()).unwrap();
        GraphHopperProvider::new(
            client,
            "https://graphhopper.com/api/1".to_string(),
            "test_key".to_string(),
        )
    }

    #[test]
    fn test_route_url_points_in_lat_lon_order() {
        let origin = Coordinate::new(116.39139, 39.9075);
        let destination = Coordinate::new(116.3975, 39.9087);
        let request = RouteRequest::new(origin, destination, TravelMode::Driving);

        let url = test_provider().route_url(&request);
        assert_eq!(
            url,
            "https://graphhopper.com/api/1/route?point=39.9075,116.39139&point=39.9087,116.3975&profile=car&points_encoded=false&key=test_key"
        );
    }

    #[test]
    fn test_route_url_avoid_highways() {
        let origin = Coordinate::new(116.39139, 39.9075);
        let destination = Coordinate::new(116.3975, 39.9087);
        let request =
            RouteRequest::new(origin, destination, TravelMode::Driving).with_avoid_highways(true);

        let url = test_provider().route_url(&request);
        assert!(url.contains("ch.disable=true"));
        assert!(url.contains("avoid=motorway"));
    }

    #[test]
    fn test_parse_successful_response() {
        let body = r#"{
            "paths": [{
                "distance": 1200.0,
                "time": 300000,
                "points": {
                    "type": "LineString",
                    "coordinates": [[116.39139, 39.9075], [116.3975, 39.9087]]
                }
            }]
        }"#;

        let route = parse_route_response(body).unwrap();
        assert_eq!(route.distance_km, 1.2);
        assert_eq!(route.duration_min, 5.0);
        assert_eq!(route.geometry.len(), 2);
    }

    #[test]
    fn test_parse_empty_paths_is_unroutable() {
        let result = parse_route_response(r#"{"paths": []}"#);
        assert!(matches!(result, Err(RouteWiseError::Unroutable { .. })));
    }

    #[test]
    fn test_error_message_extraction() {
        let body = r#"{"message": "Connection between locations not found"}"#;
        assert_eq!(error_message(body), "Connection between locations not found");
        assert_eq!(error_message("plain text"), "plain text");
    }
}

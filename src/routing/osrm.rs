//! OSRM routing provider
//!
//! Calls the public OSRM HTTP API: profile in the URL path, stops as a
//! semicolon-separated `lon,lat` list, GeoJSON geometry. OSRM signals
//! route-level failures in the response body (`code != "Ok"`) with a 2xx
//! status, so body inspection decides between transport and no-route errors.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::Result;
use crate::error::RouteWiseError;
use crate::models::{Coordinate, RouteRequest, RouteResult};
use crate::routing::RoutingProvider;

pub struct OsrmProvider {
    client: ClientWithMiddleware,
    base_url: String,
}

impl OsrmProvider {
    #[must_use]
    pub fn new(client: ClientWithMiddleware, base_url: String) -> Self {
        Self { client, base_url }
    }

    fn route_url(&self, request: &RouteRequest) -> String {
        let coordinates = request
            .stops()
            .iter()
            .map(Coordinate::format_lon_lat)
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson",
            self.base_url,
            request.mode.osrm_profile(),
            coordinates
        )
    }
}

#[async_trait]
impl RoutingProvider for OsrmProvider {
    #[instrument(skip(self, request))]
    async fn plan_route(&self, request: &RouteRequest) -> Result<RouteResult> {
        if request.avoid_highways {
            // OSRM has no avoid option; forwarded requests simply lose the hint
            debug!("avoid_highways requested but not supported by OSRM, ignoring");
        }

        let url = self.route_url(request);
        debug!("OSRM request URL: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            RouteWiseError::routing_unavailable(format!("OSRM request failed: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RouteWiseError::routing_unavailable(format!(
                "OSRM returned HTTP {status}"
            )));
        }

        let body = response.text().await.map_err(|e| {
            RouteWiseError::routing_unavailable(format!("failed to read OSRM response: {e}"))
        })?;

        parse_route_response(&body)
    }
}

/// Parse an OSRM route response body into a `RouteResult`
fn parse_route_response(body: &str) -> Result<RouteResult> {
    let response: OsrmRouteResponse = serde_json::from_str(body).map_err(|e| {
        RouteWiseError::routing_unavailable(format!("invalid OSRM response: {e}"))
    })?;

    if response.code != "Ok" {
        let detail = response.message.unwrap_or(response.code);
        return Err(RouteWiseError::unroutable(format!(
            "OSRM could not find a route: {detail}"
        )));
    }

    let route = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RouteWiseError::unroutable("OSRM returned no route candidates"))?;

    let geometry = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[longitude, latitude]| Coordinate::new(longitude, latitude))
        .collect();

    Ok(RouteResult::from_provider_units(
        route.distance,
        route.duration,
        geometry,
    ))
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    /// Route length in meters
    distance: f64,
    /// Travel time in seconds
    duration: f64,
    geometry: OsrmGeometry,
}

/// GeoJSON LineString, coordinates in longitude/latitude order
#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

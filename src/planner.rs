//! Trip planning workflow
//!
//! This module wires the whole chain together: validate the coordinate
//! inputs, plan the route, build the map view, fetch weather for the origin,
//! evaluate advisories, and assemble the report. Routing failures are fatal
//! and stop the workflow before any map or report exists; weather failures
//! degrade to the fallback advisory and the trip plan is still produced.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::Result;
use crate::advisory::{self, Advisory};
use crate::config::RouteWiseConfig;
use crate::http;
use crate::map::MapView;
use crate::models::{Coordinate, RouteRequest, RouteResult, TravelMode, WeatherSnapshot};
use crate::report;
use crate::routing::{self, RoutingProvider};
use crate::weather::{OpenMeteoProvider, WeatherProvider};

/// One trip planning request, as received from the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Origin as raw "longitude,latitude" text
    pub start: String,
    /// Destination as raw "longitude,latitude" text
    pub end: String,
    pub mode: TravelMode,
    /// Optional intermediate stop as raw "longitude,latitude" text
    #[serde(default)]
    pub waypoint: Option<String>,
    #[serde(default)]
    pub avoid_highways: bool,
}

/// The complete result of one successful planning run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPlan {
    /// Raw origin input, echoed back
    pub start: String,
    /// Raw destination input, echoed back
    pub end: String,
    pub mode: TravelMode,
    pub route: RouteResult,
    pub map: MapView,
    /// Absent when the weather call failed; advisories then hold the fallback
    pub weather: Option<WeatherSnapshot>,
    pub advisories: Vec<Advisory>,
    /// Downloadable plain-text report
    pub report: String,
}

/// Stateless planning service over pluggable routing and weather providers
pub struct TripPlanner {
    routing: Box<dyn RoutingProvider>,
    weather: Box<dyn WeatherProvider>,
}

impl TripPlanner {
    #[must_use]
    pub fn new(routing: Box<dyn RoutingProvider>, weather: Box<dyn WeatherProvider>) -> Self {
        Self { routing, weather }
    }

    /// Build the planner with the configured providers on a shared HTTP client
    pub fn from_config(config: &RouteWiseConfig) -> Result<Self> {
        let client = http::build_client(&config.http)?;
        let routing = routing::provider_from_config(config, client.clone())?;
        let weather = Box::new(OpenMeteoProvider::new(
            client,
            config.weather.base_url.clone(),
        ));
        Ok(Self::new(routing, weather))
    }

    /// Run the full workflow for one request.
    #[instrument(skip(self, request), fields(mode = %request.mode))]
    pub async fn plan(&self, request: &TripRequest) -> Result<TripPlan> {
        let origin: Coordinate = request.start.parse()?;
        let destination: Coordinate = request.end.parse()?;
        let waypoints: Vec<Coordinate> = match &request.waypoint {
            Some(text) => vec![text.parse()?],
            None => Vec::new(),
        };

        let route_request = RouteRequest::new(origin, destination, request.mode)
            .with_waypoints(waypoints.clone())
            .with_avoid_highways(request.avoid_highways);
        let route = self.routing.plan_route(&route_request).await?;
        info!(
            "Planned route: {} in {}",
            route.format_distance(),
            route.format_duration()
        );

        let map = MapView::for_trip(origin, &waypoints, destination, &route);

        let (weather, advisories) = self.advise(&origin, &route).await;

        let report = report::render(
            &request.start,
            &request.end,
            request.mode,
            &route,
            weather.as_ref(),
            &advisories,
        );

        Ok(TripPlan {
            start: request.start.clone(),
            end: request.end.clone(),
            mode: request.mode,
            route,
            map,
            weather,
            advisories,
            report,
        })
    }

    /// Fetch weather for the origin and evaluate the advisory rules.
    ///
    /// Never fails: a weather error downgrades to the fallback advisory so
    /// the route is still presented.
    async fn advise(
        &self,
        origin: &Coordinate,
        route: &RouteResult,
    ) -> (Option<WeatherSnapshot>, Vec<Advisory>) {
        match self.weather.current(origin).await {
            Ok(snapshot) => {
                let local_hour = Local::now().hour();
                let advisories = advisory::evaluate(&snapshot, route, local_hour);
                (Some(snapshot), advisories)
            }
            Err(e) => {
                warn!("Weather lookup failed, advisory degraded: {}", e);
                (None, advisory::fallback())
            }
        }
    }
}

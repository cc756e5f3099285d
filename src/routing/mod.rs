//! Trip planner clients
//!
//! This module provides the routing provider abstraction and its two
//! implementations:
//! - OSRM, a path-based public routing service (no API key)
//! - GraphHopper, a key-authenticated directions service with waypoint
//!   and avoid-highways support
//!
//! Provider selection is configuration-driven; the workflow only sees the
//! `RoutingProvider` trait.

use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;

use crate::Result;
use crate::config::{RouteWiseConfig, RoutingProviderKind};
use crate::error::RouteWiseError;
use crate::models::{RouteRequest, RouteResult};

pub mod graphhopper;
pub mod osrm;

pub use graphhopper::GraphHopperProvider;
pub use osrm::OsrmProvider;

/// A routing service that converts coordinates and a mode into a route.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Plan a route through the request's stops in order.
    ///
    /// Transport failures surface as `RoutingUnavailable` after the client's
    /// retry policy is exhausted; a provider that answers but finds no route
    /// fails with `Unroutable`.
    async fn plan_route(&self, request: &RouteRequest) -> Result<RouteResult>;
}

/// Build the configured routing provider on top of the shared HTTP client
pub fn provider_from_config(
    config: &RouteWiseConfig,
    client: ClientWithMiddleware,
) -> Result<Box<dyn RoutingProvider>> {
    match config.routing.provider {
        RoutingProviderKind::Osrm => Ok(Box::new(OsrmProvider::new(
            client,
            config.routing.osrm_base_url.clone(),
        ))),
        RoutingProviderKind::Graphhopper => {
            let api_key = config
                .routing
                .api_key
                .clone()
                .filter(|key| !key.is_empty())
                .ok_or_else(|| {
                    RouteWiseError::config("GraphHopper routing requires routing.api_key")
                })?;
            Ok(Box::new(GraphHopperProvider::new(
                client,
                config.routing.graphhopper_base_url.clone(),
                api_key,
            )))
        }
    }
}

//! JSON API for the trip planning workflow

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::error::RouteWiseError;
use crate::planner::{TripPlan, TripPlanner, TripRequest};

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

pub fn router(planner: Arc<TripPlanner>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trip", post(plan_trip))
        .route("/trip/report", post(trip_report))
        .with_state(planner)
}

async fn health() -> &'static str {
    "ok"
}

async fn plan_trip(
    State(planner): State<Arc<TripPlanner>>,
    Json(request): Json<TripRequest>,
) -> Result<Json<TripPlan>, (StatusCode, Json<ApiError>)> {
    let plan = planner.plan(&request).await.map_err(error_response)?;
    Ok(Json(plan))
}

/// Same workflow, but answers with the plain-text report as a download
async fn trip_report(
    State(planner): State<Arc<TripPlanner>>,
    Json(request): Json<TripRequest>,
) -> Result<Response, (StatusCode, Json<ApiError>)> {
    let plan = planner.plan(&request).await.map_err(error_response)?;

    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"trip_report.txt\"",
        ),
    ];
    Ok((headers, plan.report).into_response())
}

/// Map workflow errors onto HTTP statuses: invalid input is the client's
/// fault, a missing route is a 404 per provider semantics, transport
/// failures are an upstream problem.
fn error_response(error: RouteWiseError) -> (StatusCode, Json<ApiError>) {
    let status = match &error {
        RouteWiseError::InvalidFormat { .. } | RouteWiseError::OutOfRange { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        RouteWiseError::Unroutable { .. } => StatusCode::NOT_FOUND,
        RouteWiseError::RoutingUnavailable { .. } | RouteWiseError::WeatherUnavailable { .. } => {
            StatusCode::BAD_GATEWAY
        }
        RouteWiseError::Config { .. } | RouteWiseError::Io { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ApiError {
            error: error.user_message(),
        }),
    )
}

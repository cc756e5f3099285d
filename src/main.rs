use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use routewise::config::RouteWiseConfig;
use routewise::planner::TripPlanner;
use routewise::web;

#[tokio::main]
async fn main() -> Result<()> {
    let config = RouteWiseConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting RouteWise v{}", routewise::VERSION);
    info!(
        "Routing provider: {:?}, retries enabled: {}",
        config.routing.provider, config.http.retries_enabled
    );

    let planner = Arc::new(TripPlanner::from_config(&config)?);
    web::run(planner, config.server.port).await;

    Ok(())
}

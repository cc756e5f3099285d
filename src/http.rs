//! Shared outbound HTTP client for provider calls
//!
//! Retry is a cross-cutting policy applied as client middleware rather than
//! inside provider code: transport-level failures are retried with a fixed
//! delay, while application-level responses (e.g. "no route") pass through
//! untouched. With retries disabled the client behaves identically on the
//! success path, only resilience differs.

use std::time::Duration;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use tracing::debug;

use crate::Result;
use crate::config::HttpConfig;
use crate::error::RouteWiseError;

/// User agent sent with every outbound request
const USER_AGENT: &str = concat!("routewise/", env!("CARGO_PKG_VERSION"));

/// Build the shared client from configuration.
///
/// `max_attempts` counts the initial request, so 3 attempts means up to
/// 2 retries with a fixed `retry_delay_ms` wait in between.
pub fn build_client(config: &HttpConfig) -> Result<ClientWithMiddleware> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| RouteWiseError::config(format!("failed to build HTTP client: {e}")))?;

    let mut builder = ClientBuilder::new(client);

    if config.retries_enabled {
        let delay = Duration::from_millis(u64::from(config.retry_delay_ms));
        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(delay, delay)
            .build_with_max_retries(config.max_attempts.saturating_sub(1));
        builder = builder.with(RetryTransientMiddleware::new_with_policy(retry_policy));
    } else {
        debug!("HTTP retries disabled by configuration");
    }

    Ok(builder.build())
}

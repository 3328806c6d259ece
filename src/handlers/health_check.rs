//! # Health Check Handler
//!
//! Liveness endpoint for load balancers, container probes and deployment
//! tooling.

use tracing::{debug, instrument};

use crate::utils::constant::HEALTH_CHECK_MESSAGE;

/// Health check endpoint.
///
/// GET /health
///
/// Performs no dependency checks; answering at all means the process is alive.
///
/// # Returns
///
/// Always `200 OK` with the plain-text body `I'm alive`.
#[instrument]
pub async fn health_check() -> &'static str {
    debug!("Health check endpoint accessed");
    HEALTH_CHECK_MESSAGE
}

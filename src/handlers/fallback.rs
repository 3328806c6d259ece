use axum::http::{Method, Uri};
use tracing::{instrument, warn};

use crate::error::AppError;

/// Handles every request that matches no route.
#[instrument]
pub async fn route_not_found(method: Method, uri: Uri) -> AppError {
    warn!("No route matched");
    AppError::NotFound("route not found")
}

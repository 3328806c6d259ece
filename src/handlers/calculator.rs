//! # Calculator Handler
//!
//! Adapts the `/plus` query string into a [`Calculation`], delegates the
//! arithmetic to [`CalculatorService`](crate::services::calculator::CalculatorService)
//! and returns the completed calculation as JSON.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use tracing::{info, instrument};

use crate::error::AppResult;
use crate::models::{AppState, Calculation};

/// Adds two numbers supplied as query parameters.
///
/// GET /plus?num1={i32}&num2={i32}
///
/// Missing or non-numeric parameters are rejected by the [`Query`] extractor
/// before this handler runs.
///
/// # Returns
///
/// - `200 OK` with `{"num1": .., "num2": .., "sum": ..}`
/// - `400 Bad Request` - `num1` or `num2` missing or not a 32-bit integer
/// - `422 Unprocessable Entity` - The sum does not fit in a 32-bit integer
#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn plus_two_numbers(
    State(state): State<Arc<AppState>>,
    Query(calculation): Query<Calculation>,
) -> AppResult<Json<Calculation>> {
    info!(?calculation, "Handling addition request");

    let sum = state.calculator_service.plus_two_numbers(&calculation)?;

    info!(sum, "Calculator service returned");
    Ok(Json(calculation.with_sum(sum)))
}

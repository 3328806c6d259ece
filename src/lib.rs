//! # Calculator - Layered HTTP Service
//!
//! A small service built as router → handler → service → value object.
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the public endpoints
//! - [`models`] - The calculation value object and shared application state
//! - [`services`] - Business logic independent of HTTP
//! - [`utils`] - Configuration, constants and tracing setup

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_check, plus_two_numbers, route_not_found};
use crate::models::AppState;
use crate::services::calculator::CalculatorService;

/// Creates an Axum router wired with the default services.
#[inline]
pub fn app() -> Router {
    app_with_state(AppState::new(CalculatorService::new()))
}

/// Creates an Axum router with application routes around the given state.
///
/// # Routes
///
/// - `GET /health` - Liveness check
/// - `GET /plus?num1=..&num2=..` - Two-number addition
///
/// Any other request receives a JSON `404 Not Found`.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/plus", get(plus_two_numbers))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

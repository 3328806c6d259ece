//! # HTTP Request Handlers
//!
//! Each handler is responsible for processing specific HTTP requests and
//! returning appropriate responses.
//!
//! ## Available Handlers
//!
//! - **Calculator** (`calculator`) - Two-number addition
//! - **Fallback** (`fallback`) - JSON 404 for unknown routes
//! - **Health Check** (`health_check`) - Application liveness

mod calculator;
mod fallback;
mod health_check;

pub use calculator::*;
pub use fallback::*;
pub use health_check::*;

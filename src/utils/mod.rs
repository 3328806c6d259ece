//! # Utility Modules
//!
//! Constants, configuration and tracing setup used throughout the
//! application.
//!
//! ## Available Utilities
//!
//! - **Config** (`config`) - Environment-driven server configuration
//! - **Constants** (`constant`) - Application-wide fixed values and fallbacks
//! - **Telemetry** (`telemetry`) - Tracing subscriber initialization

pub mod config;
pub mod constant;
pub mod telemetry;

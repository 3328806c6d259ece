//! # Application Constants
//!
//! Fixed values used throughout the application and the fallbacks applied
//! when configuration is missing or invalid.

use std::net::{IpAddr, Ipv4Addr};

/// Body returned by the health check endpoint
pub const HEALTH_CHECK_MESSAGE: &str = "I'm alive";

/// Address the server binds to when `APP_HOST` is unset or invalid
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Port the server listens on when `APP_PORT` is unset or invalid
pub const DEFAULT_PORT: u16 = 8080;

/// Tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "calculator=info,tower_http=info";

/// Service name attached to JSON log records
pub const SERVICE_NAME: &str = "calculator";

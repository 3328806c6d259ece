//! # Server Configuration
//!
//! Reads the process environment (after `.env` has been loaded by `main`).
//! Invalid values are logged and replaced by their defaults instead of
//! aborting startup.
//!
//! ## Environment Variables
//!
//! - `APP_HOST` - IP address to bind (default `0.0.0.0`)
//! - `APP_PORT` - TCP port to listen on (default `8080`)
//! - `LOG_FORMAT` - `json` for bunyan-style records, anything else for plain text

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use tracing::error;

use crate::utils::constant::*;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: parse_or_default("APP_HOST", lookup("APP_HOST"), DEFAULT_HOST),
            port: parse_or_default("APP_PORT", lookup("APP_PORT"), DEFAULT_PORT),
            log_format: LogFormat::from_env_value(lookup("LOG_FORMAT").as_deref()),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    match raw {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            error!("Invalid {name} env var {raw:?}, using fallback {default}");
            default
        }),
    }
}

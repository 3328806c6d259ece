//! # Tracing Setup
//!
//! Installs the global tracing subscriber. `RUST_LOG` controls the filter;
//! [`LogFormat`] picks between human-readable output and bunyan JSON records.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::utils::config::LogFormat;
use crate::utils::constant::{DEFAULT_LOG_FILTER, SERVICE_NAME};

/// Initializes the global subscriber. Must be called at most once per process.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                SERVICE_NAME.into(),
                std::io::stdout,
            ))
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

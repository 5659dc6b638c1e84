//! Structured logging module using tracing.
//!
//! Pretty output for development, JSON lines for log aggregation.

use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::MonitoringConfig;

/// Initialize structured logging.
///
/// If a global subscriber is already installed the call is a no-op.
pub fn init_logging(config: &MonitoringConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json_logs {
        let json_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .with_thread_ids(true)
            .with_target(true);
        registry.with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer()
            .pretty()
            .with_target(true)
            .with_file(false)
            .with_line_number(false);
        registry.with(fmt_layer).try_init()
    };

    if installed.is_err() {
        debug!("Global subscriber already installed, keeping it");
    }

    Ok(())
}

/// Initializes test tracing for unit and integration tests
pub fn init_test_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_target(false)
        .with_test_writer()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

//! Monitoring for the Mergington activities API.
//!
//! Installs the global `tracing` subscriber and exposes structured
//! metric events for the HTTP layer.

use tracing::info;

pub mod logging;
pub mod metrics;

/// Configuration for initializing the monitoring system
#[derive(Debug, Clone)]
pub struct MonitoringConfig {
    /// Service name attached to startup logs
    pub service_name: String,
    /// Log level filter (e.g., "info,mergington=debug"). `RUST_LOG` wins when set.
    pub log_filter: String,
    /// Emit JSON lines instead of human-readable logs
    pub json_logs: bool,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            service_name: "mergington".to_string(),
            log_filter: "info".to_string(),
            json_logs: false,
            environment: "development".to_string(),
        }
    }
}

/// Initialize monitoring system
pub fn init(config: MonitoringConfig) -> anyhow::Result<()> {
    logging::init_logging(&config)?;

    info!(
        service_name = %config.service_name,
        environment = %config.environment,
        "Monitoring initialized"
    );

    Ok(())
}

/// Shutdown the monitoring system
pub fn shutdown() {
    info!("Shutting down monitoring system");
}


// Exported types
pub use crate::metrics::*;

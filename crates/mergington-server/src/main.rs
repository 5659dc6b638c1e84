use anyhow::{Context, Result};
use mergington_monitoring::MonitoringConfig;
use mergington_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Set up monitoring
    let monitoring_config = MonitoringConfig {
        service_name: "mergington-server".to_string(),
        log_filter: std::env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info,mergington=debug".to_string()),
        json_logs: std::env::var("LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false),
        environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
    };

    mergington_monitoring::init(monitoring_config)
        .context("Failed to initialize monitoring")?;

    // Load configuration from environment variables
    let config = ServerConfig::load().context("Failed to load configuration")?;

    mergington_server::run(config).await.context("Server error")?;

    mergington_monitoring::shutdown();
    Ok(())
}

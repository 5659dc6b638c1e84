//! Configuration for the Mergington Server
//!
//! This module contains the configuration types and loading functionality.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::error::{ServerError, ServerResult};

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host to bind to
    #[serde(default = "default_host")]
    pub bind_address: String,

    /// Directory mounted under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Redirect target for `GET /`
    #[serde(default = "default_landing_page")]
    pub landing_page: String,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_port() -> u16 {
    8000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_landing_page() -> String {
    "/static/index.html".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Logging variables (`LOG_LEVEL`, `LOG_FORMAT`) are read by the binary
    /// before this runs, not here.
    pub fn load() -> ServerResult<Self> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_source<F>(lookup: F) -> ServerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Start with defaults
        let mut config = Self::default();

        if let Some(port) = lookup("SERVER_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.port = port;
            } else {
                warn!("Invalid SERVER_PORT value: {}", port);
            }
        }

        if let Some(host) = lookup("SERVER_HOST") {
            config.bind_address = host;
        }

        if let Some(static_dir) = lookup("STATIC_DIR") {
            config.static_dir = PathBuf::from(static_dir);
        }

        if let Some(landing_page) = lookup("LANDING_PAGE") {
            config.landing_page = landing_page;
        }

        if let Some(environment) = lookup("ENVIRONMENT") {
            config.environment = environment;
        }

        config.validate()?;

        info!("Loaded server configuration");
        Ok(config)
    }

    /// Validate required fields
    pub fn validate(&self) -> ServerResult<()> {
        if self.bind_address.trim().is_empty() {
            return Err(ServerError::ConfigError(
                "Bind address is required".to_string(),
            ));
        }

        if !self.landing_page.starts_with('/') {
            return Err(ServerError::ConfigError(format!(
                "Landing page must be an absolute path, got {}",
                self.landing_page
            )));
        }

        if !self.static_dir.is_dir() {
            warn!(
                static_dir = %self.static_dir.display(),
                "Static directory does not exist - /static requests will return 404"
            );
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_address: default_host(),
            static_dir: default_static_dir(),
            landing_page: default_landing_page(),
            environment: default_environment(),
        }
    }
}

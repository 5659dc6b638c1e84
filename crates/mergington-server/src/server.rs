//! Main Mergington Server implementation
//!
//! This module contains the MergingtonServer implementation.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tokio::net::TcpListener;
use tracing::info;

use mergington_core::{ActivityDirectoryService, ActivityRepository};

use crate::config::ServerConfig;
use crate::error::ServerResult;

/// Main server implementation
#[derive(Clone)]
pub struct MergingtonServer {
    /// Configuration
    pub config: ServerConfig,

    /// Directory service over the activity store
    directory: Arc<ActivityDirectoryService>,

    /// When the server was constructed
    started_at: DateTime<Utc>,
}

/// Manual Debug implementation that doesn't try to debug the trait objects
impl std::fmt::Debug for MergingtonServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergingtonServer")
            .field("config", &self.config)
            .field("started_at", &self.started_at)
            .finish()
    }
}

impl MergingtonServer {
    /// Create a new MergingtonServer over `repository`
    pub fn new(config: ServerConfig, repository: Arc<dyn ActivityRepository>) -> Self {
        Self {
            config,
            directory: Arc::new(ActivityDirectoryService::new(repository)),
            started_at: Utc::now(),
        }
    }

    /// Directory service handlers call into
    pub fn directory(&self) -> &ActivityDirectoryService {
        &self.directory
    }

    /// Construction time, reported by the health endpoint
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Build the HTTP router for this server
    pub fn router(&self) -> Router {
        crate::api::build_router(Arc::new(self.clone()))
    }

    /// Bind the configured address and run until Ctrl-C or SIGTERM
    pub async fn run(self) -> ServerResult<()> {
        info!("Starting Mergington Server");

        let addr = format!("{}:{}", self.config.bind_address, self.config.port);
        let listener = TcpListener::bind(&addr).await?;

        self.serve_with_shutdown(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `signal` resolves
    pub async fn serve_with_shutdown<F>(self, listener: TcpListener, signal: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = listener.local_addr()?;
        info!("Listening on {}", addr);

        let app = self.router();
        axum::serve(listener, app)
            .with_graceful_shutdown(signal)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

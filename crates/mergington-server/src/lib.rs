//!
//! Mergington Server - HTTP front end for the activity directory
//!
//! This module exports all the components of the Mergington Server.

use std::sync::Arc;

use mergington_state_inmemory::InMemoryActivityRepository;

/// API module
pub mod api;

/// Server module
pub mod server;

/// Configuration module
pub mod config;

/// Error module
pub mod error;

// Re-export key types
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::MergingtonServer;

/// Run the server over a freshly seeded in-memory catalog
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let repository = Arc::new(InMemoryActivityRepository::seeded());
    let server = MergingtonServer::new(config, repository);

    server.run().await
}

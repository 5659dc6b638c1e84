//! API module for the Mergington Server
//!
//! This module contains the API routes and handlers for the Mergington Server.

use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod activities;
pub mod errors;
pub mod health;
pub mod middleware;

use crate::server::MergingtonServer;

/// Build the router for API endpoints
pub fn build_router(server: Arc<MergingtonServer>) -> Router {
    let static_files = ServeDir::new(&server.config.static_dir);

    Router::new()
        // Landing page
        .route("/", get(activities::root_redirect))

        // Activity directory
        .route("/activities", get(activities::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_for_activity),
        )
        .route(
            "/activities/:activity_name/participants",
            delete(activities::unregister_from_activity),
        )

        // Health check
        .route("/health", get(health::health_check))

        // Static collaborator
        .nest_service("/static", static_files)
        .fallback(errors::not_found)
        .method_not_allowed_fallback(errors::method_not_allowed)

        .layer(axum_middleware::from_fn(middleware::request_context))
        .layer(TraceLayer::new_for_http())

        // Shared state
        .with_state(server)
}

// Re-export all modules for easier imports
pub use activities::*;
pub use errors::*;
pub use health::*;

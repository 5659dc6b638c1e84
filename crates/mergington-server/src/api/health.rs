//! Health check endpoint for the Mergington Server
//!
//! This module contains the health check handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::server::MergingtonServer;

/// Health check handler
///
/// Reports the activity store status along with uptime. Responds with
/// 503 when the store is down.
pub async fn health_check(State(server): State<Arc<MergingtonServer>>) -> impl IntoResponse {
    debug!("Health check requested");

    let directory = server.directory();
    let store_status = match directory.health_check().await {
        Ok(true) => "UP",
        Ok(false) => "DEGRADED",
        Err(_) => "DOWN",
    };
    let activities = directory.activity_count().await.unwrap_or(0);

    let started_at = server.started_at();
    let uptime = (Utc::now() - started_at).num_seconds().max(0);

    let response = json!({
        "status": if store_status == "DOWN" { "DOWN" } else { "UP" },
        "version": env!("CARGO_PKG_VERSION"),
        "environment": server.config.environment,
        "startedAt": started_at.to_rfc3339(),
        "uptimeSeconds": uptime,
        "dependencies": {
            "activityStore": {
                "status": store_status,
                "activities": activities,
            },
        },
    });

    let status = if store_status == "DOWN" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (status, Json(response))
}

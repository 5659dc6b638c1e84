//! Metric events, emitted as structured log records.

use tracing::info;

/// Target used for every metric event, so they can be filtered separately
pub const METRICS_TARGET: &str = "mergington::metrics";

/// Mergington Server specific metrics
pub struct ServerMetrics;

impl ServerMetrics {
    /// Record HTTP request
    pub fn record_http_request(path: &str, method: &str, status_code: u16, duration_ms: f64) {
        info!(
            target: METRICS_TARGET,
            metric = "http_request",
            path = %path,
            method = %method,
            status_code,
            duration_ms,
            "HTTP request"
        );
    }

    /// Record a sign-up attempt. `outcome` is "ok" or the rejection reason.
    pub fn record_signup(activity: &str, outcome: &str) {
        info!(
            target: METRICS_TARGET,
            metric = "signup",
            activity = %activity,
            outcome = %outcome,
            "Sign-up"
        );
    }

    /// Record an unregister attempt
    pub fn record_unregister(activity: &str, outcome: &str) {
        info!(
            target: METRICS_TARGET,
            metric = "unregister",
            activity = %activity,
            outcome = %outcome,
            "Unregister"
        );
    }
}

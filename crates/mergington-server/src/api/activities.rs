//! Activity directory handlers

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use mergington_core::{ActivityCatalog, CoreError};
use mergington_monitoring::ServerMetrics;

use super::errors::ApiError;
use crate::server::MergingtonServer;

/// Raw query pairs, in request order. Repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

/// Confirmation body for roster mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `GET /` - redirect to the landing page
pub async fn root_redirect(State(server): State<Arc<MergingtonServer>>) -> Redirect {
    Redirect::temporary(&server.config.landing_page)
}

/// `GET /activities` - the full catalog, in seed order
pub async fn list_activities(
    State(server): State<Arc<MergingtonServer>>,
) -> Result<Json<ActivityCatalog>, ApiError> {
    let catalog = server.directory().list_activities().await?;
    Ok(Json(catalog))
}

/// `POST /activities/:activity_name/signup?email=...`
pub async fn signup_for_activity(
    State(server): State<Arc<MergingtonServer>>,
    activity_name: Result<Path<String>, PathRejection>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_param(activity_name)?;
    let email = email_param(params)?;

    let result = server.directory().sign_up(&activity_name, &email).await;
    ServerMetrics::record_signup(&activity_name, &outcome(&result));

    let confirmation = result?;
    Ok(Json(MessageResponse {
        message: confirmation.message(),
    }))
}

/// `DELETE /activities/:activity_name/participants?email=...`
pub async fn unregister_from_activity(
    State(server): State<Arc<MergingtonServer>>,
    activity_name: Result<Path<String>, PathRejection>,
    params: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let activity_name = activity_param(activity_name)?;
    let email = email_param(params)?;

    let result = server.directory().unregister(&activity_name, &email).await;
    ServerMetrics::record_unregister(&activity_name, &outcome(&result));

    let confirmation = result?;
    Ok(Json(MessageResponse {
        message: confirmation.message(),
    }))
}

/// A name that cannot be decoded cannot match any activity.
fn activity_param(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match path {
        Ok(Path(name)) => Ok(name),
        Err(rejection) => {
            tracing::debug!(rejection = %rejection.body_text(), "Undecodable activity name");
            Err(CoreError::ActivityNotFound(rejection.body_text()).into())
        }
    }
}

/// The last `email` value wins when the key is repeated. A missing `email`
/// is treated like an empty one.
fn email_param(params: Result<Query<QueryPairs>, QueryRejection>) -> Result<String, ApiError> {
    match params {
        Ok(Query(pairs)) => Ok(pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last()
            .unwrap_or_default()),
        Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
    }
}

fn outcome<T>(result: &Result<T, CoreError>) -> String {
    match result {
        Ok(_) => "ok".to_string(),
        Err(err) => err.to_string(),
    }
}

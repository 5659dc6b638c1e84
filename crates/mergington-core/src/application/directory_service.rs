use std::fmt;
use std::sync::Arc;

use crate::{
    domain::catalog::ActivityCatalog,
    domain::repository::ActivityRepository,
    CoreError,
};

/// Successful outcome of a roster mutation.
///
/// Carries the email exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// A participant was added
    SignedUp {
        /// Activity name
        activity: String,
        /// Raw email
        email: String,
    },
    /// One or more roster entries were removed
    Unregistered {
        /// Activity name
        activity: String,
        /// Raw email
        email: String,
    },
}

impl Confirmation {
    /// Human-readable confirmation returned to clients
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confirmation::SignedUp { activity, email } => {
                write!(f, "Signed up {} for {}", email, activity)
            }
            Confirmation::Unregistered { activity, email } => {
                write!(f, "Unregistered {} from {}", email, activity)
            }
        }
    }
}

/// Service answering the directory operations
pub struct ActivityDirectoryService {
    /// Repository holding the catalog
    repository: Arc<dyn ActivityRepository>,
}

impl ActivityDirectoryService {
    /// Create a new directory service
    pub fn new(repository: Arc<dyn ActivityRepository>) -> Self {
        Self { repository }
    }

    /// List every activity in catalog order
    pub async fn list_activities(&self) -> Result<ActivityCatalog, CoreError> {
        let catalog = self.repository.list().await?;
        tracing::debug!(activities = catalog.len(), "Listed activities");
        Ok(catalog)
    }

    /// Sign a student up for an activity
    pub async fn sign_up(&self, activity: &str, email: &str) -> Result<Confirmation, CoreError> {
        match self.repository.add_participant(activity, email).await {
            Ok(()) => {
                tracing::info!(activity = %activity, email = %email, "Participant signed up");
                Ok(Confirmation::SignedUp {
                    activity: activity.to_string(),
                    email: email.to_string(),
                })
            }
            Err(err) => {
                tracing::debug!(activity = %activity, email = %email, error = %err, "Sign-up rejected");
                Err(err)
            }
        }
    }

    /// Remove a student from an activity
    pub async fn unregister(&self, activity: &str, email: &str) -> Result<Confirmation, CoreError> {
        match self.repository.remove_participant(activity, email).await {
            Ok(removed) => {
                if removed > 1 {
                    tracing::warn!(
                        activity = %activity,
                        removed,
                        "Roster held duplicate entries for one participant"
                    );
                }
                tracing::info!(activity = %activity, email = %email, removed, "Participant unregistered");
                Ok(Confirmation::Unregistered {
                    activity: activity.to_string(),
                    email: email.to_string(),
                })
            }
            Err(err) => {
                tracing::debug!(activity = %activity, email = %email, error = %err, "Unregister rejected");
                Err(err)
            }
        }
    }

    /// Number of activities in the catalog
    pub async fn activity_count(&self) -> Result<usize, CoreError> {
        self.repository.count().await
    }

    /// Whether the underlying store is healthy
    pub async fn health_check(&self) -> Result<bool, CoreError> {
        self.repository.health_check().await
    }
}

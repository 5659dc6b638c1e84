//! Repository traits for the activity directory
//!
//! A store implements [`ActivityRepository`] to hold the catalog. Each
//! mutating method must run its lookup, validation and mutation as one
//! critical section so that concurrent callers observe the same outcomes
//! as serialized ones.

use async_trait::async_trait;

use super::catalog::ActivityCatalog;
use crate::CoreError;

/// Storage for the activity catalog
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Snapshot of the whole catalog in listing order
    async fn list(&self) -> Result<ActivityCatalog, CoreError>;

    /// Number of activities in the catalog
    async fn count(&self) -> Result<usize, CoreError>;

    /// Add `email` to the roster of `name`.
    ///
    /// Errors, in check order: [`CoreError::ActivityNotFound`],
    /// [`CoreError::EmailRequired`], [`CoreError::AlreadySignedUp`].
    async fn add_participant(&self, name: &str, email: &str) -> Result<(), CoreError>;

    /// Remove every roster entry of `name` matching `email`, returning how
    /// many were removed.
    ///
    /// Errors, in check order: [`CoreError::ActivityNotFound`],
    /// [`CoreError::EmailRequired`], [`CoreError::ParticipantNotFound`].
    async fn remove_participant(&self, name: &str, email: &str) -> Result<usize, CoreError>;

    /// Health check
    async fn health_check(&self) -> Result<bool, CoreError> {
        Ok(true)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use mergington_core::{seed_catalog, ActivityCatalog, ActivityRepository, CoreError};

/// In-memory implementation of the ActivityRepository.
///
/// One store-wide lock guards the catalog. Mutations hold the write lock
/// across lookup, validation and update.
#[derive(Clone)]
pub struct InMemoryActivityRepository {
    catalog: Arc<RwLock<ActivityCatalog>>,
}

impl InMemoryActivityRepository {
    /// Create a repository holding `catalog`
    pub fn new(catalog: ActivityCatalog) -> Self {
        debug!(activities = catalog.len(), "Creating in-memory activity repository");
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Create a repository holding the built-in seed catalog
    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }
}

impl Default for InMemoryActivityRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ActivityRepository for InMemoryActivityRepository {
    async fn list(&self) -> Result<ActivityCatalog, CoreError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.clone())
    }

    async fn count(&self) -> Result<usize, CoreError> {
        let catalog = self.catalog.read().await;
        Ok(catalog.len())
    }

    async fn add_participant(&self, name: &str, email: &str) -> Result<(), CoreError> {
        let mut catalog = self.catalog.write().await;
        let activity = catalog
            .get_mut(name)
            .ok_or_else(|| CoreError::ActivityNotFound(name.to_string()))?;

        activity.sign_up(email)?;
        debug!(activity = %name, roster = activity.participants.len(), "Roster grew");
        Ok(())
    }

    async fn remove_participant(&self, name: &str, email: &str) -> Result<usize, CoreError> {
        let mut catalog = self.catalog.write().await;
        let activity = catalog
            .get_mut(name)
            .ok_or_else(|| CoreError::ActivityNotFound(name.to_string()))?;

        let removed = activity.unregister(email)?;
        debug!(activity = %name, removed, roster = activity.participants.len(), "Roster shrank");
        Ok(removed)
    }
}

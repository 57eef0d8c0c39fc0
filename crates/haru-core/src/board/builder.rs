//! Builder for creating and configuring Board instances.

use std::sync::Arc;

use super::Board;
use crate::error::{BoardError, Result};
use crate::store::{MemoryStore, RestStore, StoreConfig, TaskStore};

/// Builder for creating and configuring Board instances.
#[derive(Default)]
pub struct BoardBuilder {
    store: Option<Arc<dyn TaskStore>>,
    config: Option<StoreConfig>,
}

impl BoardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already-constructed store.
    pub fn with_store(mut self, store: Arc<dyn TaskStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Connects to a remote database with the given settings.
    ///
    /// If neither a store nor a config is supplied, the board falls back to
    /// an in-process [`MemoryStore`].
    pub fn with_config(mut self, config: Option<StoreConfig>) -> Self {
        if let Some(config) = config {
            self.config = Some(config);
        }
        self
    }

    /// Builds the configured board instance.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::Configuration` if a remote config is present but
    /// its database URL is empty.
    pub fn build(self) -> Result<Board> {
        let store: Arc<dyn TaskStore> = if let Some(store) = self.store {
            store
        } else if let Some(config) = self.config {
            if config.database_url.trim().is_empty() {
                return Err(BoardError::configuration("database URL must not be empty"));
            }
            Arc::new(RestStore::new(config))
        } else {
            Arc::new(MemoryStore::new())
        };

        Ok(Board::new(store))
    }
}

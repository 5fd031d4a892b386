//! Planner session
//!
//! One `ExerciseStore` backed by a file fallback and a SQLite durable store,
//! synchronized by a `SyncBridge`. Front ends open a session, mutate the
//! store, then `flush` before exiting.

use std::sync::Arc;

use gymtrack_core::persist::KeyValueStore;
use gymtrack_core::ExerciseStore;
use gymtrack_store::{DurableStore, FileKeyValueStore, SqliteDurableStore};

use crate::config::PlannerConfig;
use crate::sync::{SyncBridge, SyncStatus};

#[derive(Debug)]
pub struct PlannerSession {
    store: ExerciseStore,
    bridge: SyncBridge,
}

impl PlannerSession {
    /// Open the session described by `config`
    ///
    /// Storage problems never fail the open; check [`Self::status`].
    pub async fn open(config: &PlannerConfig) -> Self {
        let fallback = Arc::new(FileKeyValueStore::new(config.fallback_path()));
        let durable = Arc::new(SqliteDurableStore::open(config.database_path()));
        Self::with_stores(fallback, durable).await
    }

    /// Open a session over caller-supplied stores
    pub async fn with_stores(
        fallback: Arc<dyn KeyValueStore>,
        durable: Arc<dyn DurableStore>,
    ) -> Self {
        let mut store = ExerciseStore::with_fallback(fallback);
        let bridge = SyncBridge::start(&mut store, durable).await;
        if let Some(err) = &bridge.status().error {
            tracing::warn!(error = %err, "durable storage unavailable, using fallback only");
        }
        Self { store, bridge }
    }

    pub fn store(&self) -> &ExerciseStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ExerciseStore {
        &mut self.store
    }

    pub fn status(&self) -> &SyncStatus {
        self.bridge.status()
    }

    /// Wait for pending durable saves
    pub async fn flush(&self) {
        self.bridge.flush().await;
    }

    /// Flush and release the session
    pub async fn close(self) {
        self.flush().await;
    }
}

//! Remote store adapters for the task collection.
//!
//! The store is an external collaborator: it owns persistence, assigns task
//! identities, and pushes the full collection state to every subscriber after
//! each change. This module defines the [`TaskStore`] seam plus the two
//! adapters shipped with the crate:
//!
//! - [`MemoryStore`]: an in-process store with the same push semantics, used
//!   by tests and as the fallback when no remote is configured.
//! - [`RestStore`]: a client for a Firebase Realtime Database style REST
//!   surface with a `text/event-stream` change subscription.
//!
//! Subscribers always receive whole snapshots; there is no incremental
//! patching on the consumer side.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::{StoreError, StoreResult};
use crate::models::{Task, TaskId};

pub mod memory;
pub mod record;
pub mod rest;

pub use memory::MemoryStore;
pub use record::{decode_snapshot, TaskPatch, TaskRecord};
pub use rest::{RestStore, StoreConfig};

/// A single push from the store's change subscription.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// Full current state of the collection after a change
    Snapshot(Vec<Task>),
    /// The subscription failed; no further snapshots will arrive
    Lost(StoreError),
}

/// Handle to a live change subscription.
///
/// Events arrive in push order; after a [`StoreEvent::Lost`] the stream ends.
/// Dropping the handle detaches from the store.
pub struct Subscription {
    rx: mpsc::UnboundedReceiver<StoreEvent>,
}

impl Subscription {
    /// Creates a channel pair for a store to push events through.
    pub fn channel() -> (mpsc::UnboundedSender<StoreEvent>, Subscription) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Subscription { rx })
    }

    /// Waits for the next event, or `None` once the store side is gone.
    pub async fn next(&mut self) -> Option<StoreEvent> {
        self.rx.recv().await
    }
}

/// Remote store operations for the task collection.
///
/// Mutations are fire-and-forget from the cache's perspective: success is
/// only reflected in the UI once the store pushes the next snapshot.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Creates a task record and returns the store-assigned id.
    async fn create(&self, record: &TaskRecord) -> StoreResult<TaskId>;

    /// Applies a partial update to the task with the given id.
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> StoreResult<()>;

    /// Removes the task with the given id.
    async fn remove(&self, id: &TaskId) -> StoreResult<()>;

    /// Registers a listener for collection changes.
    ///
    /// The store pushes the current snapshot immediately, then a fresh
    /// snapshot after every create/update/delete by any client.
    fn subscribe(&self) -> Subscription;
}

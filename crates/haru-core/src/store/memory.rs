//! In-process store with push semantics.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;
use uuid::Uuid;

use super::{StoreEvent, Subscription, TaskStore};
use crate::error::{StoreError, StoreResult};
use crate::models::{Task, TaskId};
use crate::store::record::{TaskPatch, TaskRecord};

/// An in-memory task store mirroring the remote store's contract.
///
/// Every mutation pushes a fresh snapshot of the whole collection to all
/// live subscribers, and a subscriber receives the current snapshot
/// immediately on registration. Ids are opaque and assigned here.
///
/// Used by tests and by the CLI when no remote database is configured; state
/// lives only as long as the process.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    tasks: BTreeMap<TaskId, TaskRecord>,
    subscribers: Vec<UnboundedSender<StoreEvent>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn snapshot(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .map(|(id, record)| record.clone().into_task(id.clone()))
            .collect()
    }

    /// Pushes the current snapshot to every live subscriber, dropping
    /// subscribers whose receiving side has gone away.
    fn push(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers
            .retain(|tx| tx.send(StoreEvent::Snapshot(snapshot.clone())).is_ok());
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn create(&self, record: &TaskRecord) -> StoreResult<TaskId> {
        let id = TaskId(Uuid::new_v4().to_string());
        let mut inner = self.lock();
        inner.tasks.insert(id.clone(), record.clone());
        inner.push();
        Ok(id)
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> StoreResult<()> {
        let mut inner = self.lock();
        let Some(record) = inner.tasks.get_mut(id) else {
            return Err(StoreError::rejected(format!("no task with id {id}")));
        };
        patch.apply_to(record);
        inner.push();
        Ok(())
    }

    async fn remove(&self, id: &TaskId) -> StoreResult<()> {
        let mut inner = self.lock();
        // Removing an already-gone task is not an error, matching the
        // remote store's idempotent delete.
        inner.tasks.remove(id);
        inner.push();
        Ok(())
    }

    fn subscribe(&self) -> Subscription {
        let (tx, subscription) = Subscription::channel();
        let mut inner = self.lock();
        let _ = tx.send(StoreEvent::Snapshot(inner.snapshot()));
        inner.subscribers.push(tx);
        subscription
    }
}

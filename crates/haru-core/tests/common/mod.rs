use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use haru_core::{
    MemoryStore, StoreError, StoreEvent, StoreResult, Subscription, TaskId, TaskPatch, TaskRecord,
    TaskStore,
};

/// Store wrapper that records every call while delegating to a real
/// in-memory store, so tests can assert which mutations reached the store.
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    creates: AtomicUsize,
    removes: AtomicUsize,
    updates: Mutex<Vec<(TaskId, TaskPatch)>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> Vec<(TaskId, TaskPatch)> {
        self.updates.lock().expect("updates lock").clone()
    }
}

#[async_trait]
impl TaskStore for RecordingStore {
    async fn create(&self, record: &TaskRecord) -> StoreResult<TaskId> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(record).await
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> StoreResult<()> {
        self.updates
            .lock()
            .expect("updates lock")
            .push((id.clone(), patch.clone()));
        self.inner.update(id, patch).await
    }

    async fn remove(&self, id: &TaskId) -> StoreResult<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(id).await
    }

    fn subscribe(&self) -> Subscription {
        self.inner.subscribe()
    }
}

/// Store whose every mutation fails, for exercising failure paths.
pub struct FailingStore;

#[async_trait]
impl TaskStore for FailingStore {
    async fn create(&self, _record: &TaskRecord) -> StoreResult<TaskId> {
        Err(StoreError::network("store offline"))
    }

    async fn update(&self, _id: &TaskId, _patch: &TaskPatch) -> StoreResult<()> {
        Err(StoreError::network("store offline"))
    }

    async fn remove(&self, _id: &TaskId) -> StoreResult<()> {
        Err(StoreError::network("store offline"))
    }

    fn subscribe(&self) -> Subscription {
        let (tx, subscription) = Subscription::channel();
        let _ = tx.send(StoreEvent::Lost(StoreError::network("store offline")));
        subscription
    }
}

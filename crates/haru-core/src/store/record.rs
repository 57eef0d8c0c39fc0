//! Wire representation of task records and snapshot decoding.

use jiff::Timestamp;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{Category, Task, TaskId};

/// A task as it travels on the wire, without its id.
///
/// The store keys records by id; the fields are a flat object of plain
/// text/boolean values. Field names use the camelCase convention existing
/// clients already write.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub text: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub category: Category,
    #[serde(default)]
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl TaskRecord {
    /// Attaches a store-assigned id, producing a full task.
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            text: self.text,
            date: self.date,
            time: self.time,
            category: self.category,
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            text: task.text.clone(),
            date: task.date.clone(),
            time: task.time.clone(),
            category: task.category,
            completed: task.completed,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

/// A sparse field update for an existing record.
///
/// Only fields set to `Some` are serialized, so the store merges them into
/// the stored record without touching anything else.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl TaskPatch {
    /// Applies this patch to a stored record, field by field.
    pub fn apply_to(&self, record: &mut TaskRecord) {
        if let Some(text) = &self.text {
            record.text = text.clone();
        }
        if let Some(date) = &self.date {
            record.date = date.clone();
        }
        if let Some(time) = &self.time {
            record.time = time.clone();
        }
        if let Some(category) = self.category {
            record.category = category;
        }
        if let Some(completed) = self.completed {
            record.completed = completed;
        }
        if let Some(updated_at) = self.updated_at {
            record.updated_at = Some(updated_at);
        }
    }
}

/// Decodes a raw collection snapshot into task records.
///
/// The wire shape is an object keyed by id, or null for an empty collection.
/// Records that fail to decode (unknown category, wrong field types) are
/// skipped with a warning rather than poisoning the whole snapshot.
pub fn decode_snapshot(value: Value) -> Vec<Task> {
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Vec::new(),
        other => {
            warn!("Ignoring snapshot with unexpected shape: {other}");
            return Vec::new();
        }
    };

    let mut tasks = Vec::with_capacity(map.len());
    for (id, raw) in map {
        match serde_json::from_value::<TaskRecord>(raw) {
            Ok(record) => tasks.push(record.into_task(TaskId(id))),
            Err(err) => warn!("Skipping undecodable task '{id}': {err}"),
        }
    }
    tasks
}

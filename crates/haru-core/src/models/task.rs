//! Task model definition and related functionality.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Category;

/// Opaque task identity assigned by the remote store on creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A single todo entry mirrored from the remote store.
///
/// `date` and `time` are kept as the ISO strings that travel on the wire
/// (`YYYY-MM-DD`, 24-hour `HH:MM`) so that values round-trip byte-identically
/// through the store and lexicographic order equals chronological order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Store-assigned identifier, stable for the task's lifetime
    pub id: TaskId,

    /// User-entered description, non-empty for tasks created here
    pub text: String,

    /// Calendar date in ISO `YYYY-MM-DD` form, possibly empty
    pub date: String,

    /// Time of day in 24-hour `HH:MM` form, possibly empty
    pub time: String,

    /// One of the four fixed groupings
    pub category: Category,

    /// Whether the task has been checked off
    #[serde(default)]
    pub completed: bool,

    /// Timestamp set by the creating client (UTC)
    #[serde(default)]
    pub created_at: Option<Timestamp>,

    /// Timestamp set by the last editing client (UTC)
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

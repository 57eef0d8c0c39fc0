//! Parameter structures for board operations
//!
//! Shared parameter structures usable across different interfaces (CLI, a
//! future GUI shell, tests) without framework-specific derives. Interface
//! layers wrap these with their own derives (clap arguments in the CLI) and
//! convert via `From` implementations, keeping the core free of UI framework
//! dependencies.
//!
//! ```text
//! CLI Args (clap) ───▶ Core Params ───▶ Board handlers ───▶ Store calls
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Category, TaskId};

/// Generic parameters for operations requiring just a task id.
///
/// Used for toggle, open-edit, and request-delete intents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Id {
    /// The id of the task to operate on
    pub id: TaskId,
}

/// Parameters for adding a new task.
///
/// `text`, `date`, and `time` must all be non-empty for the add to reach the
/// store; the category always has a default selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddTask {
    /// Description of the task (required, leading/trailing whitespace trimmed)
    pub text: String,
    /// Calendar date in ISO `YYYY-MM-DD` form (required)
    pub date: String,
    /// Time of day in 24-hour `HH:MM` form (required)
    pub time: String,
    /// Category grouping for the task
    #[serde(default)]
    pub category: Category,
}

/// Parameters for editing an existing task.
///
/// Carries the full replacement field set; completion state is never touched
/// by an edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditTask {
    /// The id of the task to edit
    pub id: TaskId,
    /// New description (required)
    pub text: String,
    /// New calendar date (required)
    pub date: String,
    /// New time of day (required)
    pub time: String,
    /// New category grouping
    #[serde(default)]
    pub category: Category,
}

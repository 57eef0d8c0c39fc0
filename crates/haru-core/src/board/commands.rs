//! Named commands and their outcomes.

use crate::models::CategoryFilter;
use crate::params::{AddTask, EditTask, Id};

/// A user intent, tagged so every mutation flows through one dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a new task
    Add(AddTask),
    /// Replace an existing task's fields (never its completion state)
    Edit(EditTask),
    /// Flip a task's completion state
    Toggle(Id),
    /// Open the edit form for a task
    OpenEdit(Id),
    /// Close the edit form without saving
    CancelEdit,
    /// Ask for delete confirmation for a task
    RequestDelete(Id),
    /// Confirm the pending delete
    ConfirmDelete,
    /// Dismiss the pending delete
    CancelDelete,
    /// Change the active category filter
    SetFilter(CategoryFilter),
}

/// What a command did, reported explicitly so the caller owns alert policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A store mutation was issued; the cache updates on the next snapshot
    Submitted,
    /// Required input was missing or the target is unknown; nothing was sent
    Ignored,
    /// Only local selection state changed; no store call was made
    SelectionChanged,
}

//! Ephemeral UI selection state.

use super::{CategoryFilter, TaskId};

/// Per-session selection state owned by the board controller.
///
/// Nothing here is persisted; closing a prompt only clears these fields and
/// never cancels an in-flight store call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Task currently open in the edit form, if any
    pub editing: Option<TaskId>,

    /// Task awaiting delete confirmation, if any
    pub pending_delete: Option<TaskId>,

    /// Active category filter for the rendered list
    pub filter: CategoryFilter,
}

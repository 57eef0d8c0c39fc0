//! Command handlers translating user intents into store calls.
//!
//! Handlers never mutate the local cache; every success path relies on the
//! next subscription push to update the UI. There is therefore a visible
//! latency window between a command succeeding at the store and the change
//! appearing in the rendered list, bounded only by the store's push latency.

use jiff::Timestamp;

use super::{Board, Command, CommandOutcome};
use crate::error::Result;
use crate::models::{CategoryFilter, TaskId};
use crate::params::{AddTask, EditTask, Id};
use crate::store::{TaskPatch, TaskRecord};

impl Board {
    /// Dispatches a tagged command to its handler.
    pub async fn apply(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::Add(params) => self.add_task(&params).await,
            Command::Edit(params) => self.edit_task(&params).await,
            Command::Toggle(params) => self.toggle_task(&params).await,
            Command::OpenEdit(params) => Ok(self.open_edit(&params)),
            Command::CancelEdit => Ok(self.cancel_edit()),
            Command::RequestDelete(params) => Ok(self.request_delete(&params)),
            Command::ConfirmDelete => self.confirm_delete().await,
            Command::CancelDelete => Ok(self.cancel_delete()),
            Command::SetFilter(filter) => Ok(self.set_filter(filter)),
        }
    }

    /// Handle adding a new task.
    ///
    /// Text is trimmed before validation; a missing text, date, or time is a
    /// silent no-op and no create reaches the store. The created record
    /// starts uncompleted and carries a creation timestamp.
    pub async fn add_task(&self, params: &AddTask) -> Result<CommandOutcome> {
        let text = params.text.trim();
        if text.is_empty() || params.date.is_empty() || params.time.is_empty() {
            return Ok(CommandOutcome::Ignored);
        }

        let record = TaskRecord {
            text: text.to_string(),
            date: params.date.clone(),
            time: params.time.clone(),
            category: params.category,
            completed: false,
            created_at: Some(Timestamp::now()),
            updated_at: None,
        };
        self.store.create(&record).await?;
        Ok(CommandOutcome::Submitted)
    }

    /// Handle editing an existing task.
    ///
    /// Applies the same validation as add, then issues a partial update with
    /// the new field values plus an update timestamp. Completion state is
    /// never part of an edit. The editing selection is cleared only on
    /// success, so a store failure leaves the form open.
    pub async fn edit_task(&mut self, params: &EditTask) -> Result<CommandOutcome> {
        let text = params.text.trim();
        if text.is_empty() || params.date.is_empty() || params.time.is_empty() {
            return Ok(CommandOutcome::Ignored);
        }

        let patch = TaskPatch {
            text: Some(text.to_string()),
            date: Some(params.date.clone()),
            time: Some(params.time.clone()),
            category: Some(params.category),
            completed: None,
            updated_at: Some(Timestamp::now()),
        };
        self.store.update(&params.id, &patch).await?;
        self.selection.editing = None;
        Ok(CommandOutcome::Submitted)
    }

    /// Handle flipping a task's completion state.
    ///
    /// The current value is read from the local cache, not the store. Two
    /// rapid toggles before a snapshot arrives can both compute the same
    /// flip and collapse into one visible change; this matches the behavior
    /// of existing clients and is intentionally left as-is. An id missing
    /// from the cache is a silent no-op.
    pub async fn toggle_task(&self, params: &Id) -> Result<CommandOutcome> {
        let Some(task) = self.find_task(&params.id) else {
            return Ok(CommandOutcome::Ignored);
        };

        let patch = TaskPatch {
            completed: Some(!task.completed),
            ..Default::default()
        };
        self.store.update(&params.id, &patch).await?;
        Ok(CommandOutcome::Submitted)
    }

    /// Opens the edit form for a cached task.
    pub fn open_edit(&mut self, params: &Id) -> CommandOutcome {
        if self.find_task(&params.id).is_none() {
            return CommandOutcome::Ignored;
        }
        self.selection.editing = Some(params.id.clone());
        CommandOutcome::SelectionChanged
    }

    /// Closes the edit form without saving.
    pub fn cancel_edit(&mut self) -> CommandOutcome {
        self.selection.editing = None;
        CommandOutcome::SelectionChanged
    }

    /// First step of deletion: records which task awaits confirmation.
    pub fn request_delete(&mut self, params: &Id) -> CommandOutcome {
        self.selection.pending_delete = Some(params.id.clone());
        CommandOutcome::SelectionChanged
    }

    /// Second step of deletion: issues the store delete for the pending id.
    ///
    /// With no pending request this is a no-op, so a single action can never
    /// delete. The pending state is cleared only on success; a store failure
    /// leaves the confirmation open.
    pub async fn confirm_delete(&mut self) -> Result<CommandOutcome> {
        let Some(id) = self.selection.pending_delete.clone() else {
            return Ok(CommandOutcome::Ignored);
        };

        self.store.remove(&id).await?;
        self.selection.pending_delete = None;
        Ok(CommandOutcome::Submitted)
    }

    /// Dismisses a pending delete without touching the store.
    pub fn cancel_delete(&mut self) -> CommandOutcome {
        self.selection.pending_delete = None;
        CommandOutcome::SelectionChanged
    }

    /// Changes the active category filter.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> CommandOutcome {
        self.selection.filter = filter;
        CommandOutcome::SelectionChanged
    }

    /// The id awaiting delete confirmation, if any.
    pub fn pending_delete(&self) -> Option<&TaskId> {
        self.selection.pending_delete.as_ref()
    }
}

//! Subscription event handling: cache replacement.

use log::error;

use super::Board;
use crate::store::StoreEvent;

impl Board {
    /// Applies one subscription event to the board.
    ///
    /// A snapshot replaces the cache wholesale; no incremental patching.
    /// Selection state is left untouched even when the selected task
    /// disappeared from the snapshot, matching how existing clients keep
    /// their prompts open across refreshes. A lost subscription is logged
    /// and otherwise ignored, leaving the stale cache displayed.
    ///
    /// Returns true when the cache was replaced and a re-render is due.
    pub fn apply_event(&mut self, event: StoreEvent) -> bool {
        match event {
            StoreEvent::Snapshot(tasks) => {
                self.tasks = tasks;
                true
            }
            StoreEvent::Lost(err) => {
                error!("Error fetching tasks: {err}");
                false
            }
        }
    }
}

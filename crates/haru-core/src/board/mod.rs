//! High-level board API: the single controller owning cache and selection.
//!
//! The [`Board`] is the central coordinator between user intents and the
//! remote store. It holds the local cache (a derived copy of the store's
//! collection), the ephemeral selection state, and the store handle; all
//! mutations flow through named commands.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   Commands   │    │    Store     │    │ Subscription │
//! │ (handlers.rs)│───▶│  (store/)    │───▶│  (sync.rs)   │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!    User intents       Persistence              │ snapshot
//!                                                ▼
//!                                         cache replaced,
//!                                         view re-projected
//! ```
//!
//! The loop is one-way and eventually consistent: no handler touches the
//! cache directly, and the UI only ever reflects confirmed remote state.
//! The last-received snapshot always wins.
//!
//! # Usage
//!
//! ```rust
//! use haru_core::{params::AddTask, BoardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = BoardBuilder::new().build()?;
//! let mut updates = board.connect();
//!
//! board
//!     .add_task(&AddTask {
//!         text: "우유 사기".to_string(),
//!         date: "2024-03-05".to_string(),
//!         time: "09:30".to_string(),
//!         category: Default::default(),
//!     })
//!     .await?;
//!
//! while let Some(event) = updates.next().await {
//!     if board.apply_event(event) {
//!         println!("{}", board.view());
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::display::{project, TaskList};
use crate::models::{Selection, Task, TaskId};
use crate::store::{Subscription, TaskStore};

pub mod builder;
pub mod commands;
pub mod handlers;
pub mod sync;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use commands::{Command, CommandOutcome};

/// Main controller for the todo board.
pub struct Board {
    pub(crate) store: Arc<dyn TaskStore>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) selection: Selection,
}

impl Board {
    /// Creates a board over the given store with an empty cache.
    pub(crate) fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            selection: Selection::default(),
        }
    }

    /// The cached tasks, in store order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The current selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Looks up a task in the local cache by id.
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Registers a listener for collection changes.
    ///
    /// Feed the returned subscription's events back through
    /// [`Board::apply_event`] to keep the cache current.
    pub fn connect(&self) -> Subscription {
        self.store.subscribe()
    }

    /// Projects the cache through the active filter into a rendered list.
    pub fn view(&self) -> TaskList {
        project(&self.tasks, self.selection.filter)
    }
}

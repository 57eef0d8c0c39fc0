//! Data models for tasks and their groupings.
//!
//! This module contains the core domain models of the haru todo system: the
//! [`Task`] record mirrored from the remote store, the fixed [`Category`]
//! groupings, the [`CategoryFilter`] used by the view projection, and the
//! ephemeral [`Selection`] state owned by the board controller.
//!
//! Display concerns live in [`crate::display`]; the models themselves only
//! carry data and the string conversions needed at the store and CLI
//! boundaries.

pub mod category;
pub mod filters;
pub mod selection;
pub mod task;


// Re-export all public types at the models level
pub use category::Category;
pub use filters::CategoryFilter;
pub use selection::Selection;
pub use task::{Task, TaskId};

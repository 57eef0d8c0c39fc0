//! Core library for the haru realtime todo application.
//!
//! This crate provides the reproducible core of a todo list backed by a
//! hosted realtime database: a thin local cache kept current by a live
//! subscription, command handlers that translate user intents into store
//! mutations, and a pure view projection over the cache.
//!
//! # Architecture
//!
//! Persistence and push notification are delegated entirely to the store
//! behind the [`store::TaskStore`] seam. The flow is a one-way, eventually
//! consistent loop:
//!
//! ```text
//! intent ─▶ command handler ─▶ store mutation ─▶ store push
//!                                                   │
//!            re-render ◀─ view projection ◀─ cache replaced
//! ```
//!
//! There is no optimistic update: the UI only ever reflects confirmed
//! remote state, and the last-received snapshot always wins.
//!
//! # Quick Start
//!
//! ```rust
//! use haru_core::{params::AddTask, BoardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // An in-memory store backs the board when no remote is configured
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
//! // The cache updates on the next push, never locally
//! while let Some(event) = updates.next().await {
//!     if board.apply_event(event) && !board.tasks().is_empty() {
//!         break;
//!     }
//! }
//! println!("{}", board.view());
//! # Ok(())
//! # }
//! ```

pub mod board;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use board::{Board, BoardBuilder, Command, CommandOutcome};
pub use display::{project, ListedTask, OperationStatus, TaskList};
pub use error::{BoardError, Result, StoreError, StoreErrorKind, StoreResult};
pub use models::{Category, CategoryFilter, Selection, Task, TaskId};
pub use params::{AddTask, EditTask, Id};
pub use store::{
    MemoryStore, RestStore, StoreConfig, StoreEvent, Subscription, TaskPatch, TaskRecord,
    TaskStore,
};

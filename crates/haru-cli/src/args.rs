use clap::{Parser, Subcommand};

use haru_core::CategoryFilter;

use crate::cli::{AddArgs, EditArgs};

/// Main command-line interface for the haru todo tool
///
/// Haru keeps a dated, categorized todo list in a hosted realtime database
/// and mirrors it live into the terminal. Every mutation goes to the remote
/// store first; the rendered list only updates once the store pushes the
/// change back, so what you see is always confirmed remote state.
#[derive(Parser)]
#[command(version, about, name = "haru")]
pub struct Args {
    /// Base URL of the realtime database. Defaults to $HARU_DATABASE_URL;
    /// with no URL configured, an in-process store is used
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Auth token appended to store requests. Defaults to $HARU_AUTH_TOKEN
    #[arg(long, global = true)]
    pub auth_token: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the haru CLI
///
/// Each subcommand maps to one user intent on the todo board; running with
/// no subcommand renders the current list.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddArgs),
    /// Edit an existing task's fields
    #[command(alias = "e")]
    Edit(EditArgs),
    /// Flip a task's completion state
    #[command(alias = "t")]
    Toggle {
        /// Id of the task to toggle
        id: String,
    },
    /// Delete a task after confirmation
    #[command(alias = "d")]
    Delete {
        /// Id of the task to delete
        id: String,
        /// Confirm the deletion; without this flag nothing is deleted
        #[arg(long)]
        yes: bool,
    },
    /// Render the task list once
    #[command(alias = "l")]
    List {
        /// Category filter to apply
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Keep rendering the list on every remote change until Ctrl-C
    #[command(alias = "w")]
    Watch {
        /// Category filter to apply
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
}

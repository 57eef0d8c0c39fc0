//! Command handling for the CLI: argument wrappers and the board driver.
//!
//! The argument structs wrap the core parameter types with clap derives,
//! keeping the core free of CLI framework concerns. The [`Cli`] struct owns
//! the board and the renderer and drives the one-way loop: prime the cache
//! from the first snapshot, apply the command, then wait for the store's
//! push before rendering anything.

use anyhow::{bail, Result};
use clap::Args;
use haru_core::{
    params::{AddTask, EditTask, Id},
    Board, BoardError, CategoryFilter, Command, CommandOutcome, OperationStatus, Subscription,
};
use log::{error, warn};

use crate::args::Commands;
use crate::renderer::TerminalRenderer;

/// Add a new task
///
/// Date and time default to today and the next full hour when omitted,
/// mirroring the prefilled add form of the web client.
#[derive(Args)]
pub struct AddArgs {
    /// Description of the task
    pub text: String,
    /// Calendar date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
    /// Time of day as HH:MM (defaults to the next full hour)
    #[arg(long)]
    pub time: Option<String>,
    /// Category: self, home, work, or other
    #[arg(long, default_value = "self")]
    pub category: haru_core::Category,
}

impl AddArgs {
    /// Convert CLI arguments to core parameters, filling in form defaults.
    pub fn into_params(self) -> Result<AddTask> {
        let date = match self.date {
            Some(date) => validated_date(date)?,
            None => default_date(),
        };
        let time = match self.time {
            Some(time) => validated_time(time)?,
            None => default_time(),
        };
        Ok(AddTask {
            text: self.text,
            date,
            time,
            category: self.category,
        })
    }
}

/// Edit an existing task's fields
#[derive(Args)]
pub struct EditArgs {
    /// Id of the task to edit
    pub id: String,
    /// New description
    pub text: String,
    /// New calendar date as YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// New time of day as HH:MM
    #[arg(long)]
    pub time: String,
    /// New category: self, home, work, or other
    #[arg(long)]
    pub category: haru_core::Category,
}

impl EditArgs {
    /// Convert CLI arguments to core parameters.
    pub fn into_params(self) -> Result<EditTask> {
        Ok(EditTask {
            id: self.id.into(),
            text: self.text,
            date: validated_date(self.date)?,
            time: validated_time(self.time)?,
            category: self.category,
        })
    }
}

/// The terminal is the UI surface here, so field format enforcement lives
/// at this layer, like the date/time input widgets of the web client.
fn validated_date(value: String) -> Result<String> {
    jiff::civil::Date::strptime("%Y-%m-%d", &value)
        .map_err(|err| BoardError::invalid_input("date").with_reason(format!("expected YYYY-MM-DD: {err}")))?;
    Ok(value)
}

fn validated_time(value: String) -> Result<String> {
    jiff::civil::Time::strptime("%H:%M", &value)
        .map_err(|err| BoardError::invalid_input("time").with_reason(format!("expected HH:MM: {err}")))?;
    Ok(value)
}

fn default_date() -> String {
    jiff::Zoned::now().strftime("%Y-%m-%d").to_string()
}

fn default_time() -> String {
    let next_hour = (jiff::Zoned::now().hour() + 1) % 24;
    format!("{next_hour:02}:00")
}

/// CLI driver owning the board and the renderer.
pub struct Cli {
    board: Board,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Create a new CLI driver.
    pub fn new(board: Board, renderer: TerminalRenderer) -> Self {
        Self { board, renderer }
    }

    /// Dispatch one invocation.
    pub async fn run(mut self, command: Option<Commands>) -> Result<()> {
        let mut updates = self.board.connect();
        self.sync_once(&mut updates).await;

        match command {
            None => self.render(),
            Some(Commands::List { category }) => {
                self.board.set_filter(category);
                self.render()
            }
            Some(Commands::Watch { category }) => {
                self.board.set_filter(category);
                self.watch(&mut updates).await
            }
            Some(Commands::Add(args)) => {
                let params = args.into_params()?;
                match self.board.apply(Command::Add(params)).await {
                    Ok(CommandOutcome::Submitted) => self.render_after_push(&mut updates).await,
                    Ok(_) => Ok(()),
                    Err(err) => {
                        error!("Error saving task: {err}");
                        bail!("{}", OperationStatus::save_failed());
                    }
                }
            }
            Some(Commands::Edit(args)) => {
                let params = args.into_params()?;
                match self.board.apply(Command::Edit(params)).await {
                    Ok(CommandOutcome::Submitted) => self.render_after_push(&mut updates).await,
                    Ok(_) => Ok(()),
                    Err(err) => {
                        error!("Error saving task: {err}");
                        bail!("{}", OperationStatus::save_failed());
                    }
                }
            }
            Some(Commands::Toggle { id }) => {
                let params = Id { id: id.into() };
                match self.board.apply(Command::Toggle(params)).await {
                    Ok(CommandOutcome::Submitted) => self.render_after_push(&mut updates).await,
                    Ok(_) => {
                        warn!("No cached task to toggle");
                        Ok(())
                    }
                    Err(err) => {
                        // Matches the web client: toggle failures are logged,
                        // never surfaced as an alert.
                        error!("Error updating task: {err}");
                        Ok(())
                    }
                }
            }
            Some(Commands::Delete { id, yes }) => {
                let params = Id { id: id.into() };
                self.board.apply(Command::RequestDelete(params)).await?;
                if !yes {
                    println!("정말 삭제하시겠습니까? --yes 플래그를 붙여 다시 실행하세요.");
                    return Ok(());
                }
                match self.board.apply(Command::ConfirmDelete).await {
                    Ok(CommandOutcome::Submitted) => self.render_after_push(&mut updates).await,
                    Ok(_) => Ok(()),
                    Err(err) => {
                        error!("Error deleting task: {err}");
                        bail!("{}", OperationStatus::delete_failed());
                    }
                }
            }
        }
    }

    /// Waits for the next event; true when a snapshot replaced the cache.
    async fn sync_once(&mut self, updates: &mut Subscription) -> bool {
        match updates.next().await {
            Some(event) => self.board.apply_event(event),
            None => false,
        }
    }

    /// Renders the list once the store has confirmed the mutation.
    async fn render_after_push(&mut self, updates: &mut Subscription) -> Result<()> {
        if self.sync_once(updates).await {
            self.render()
        } else {
            Ok(())
        }
    }

    /// Re-renders on every remote change until interrupted.
    async fn watch(&mut self, updates: &mut Subscription) -> Result<()> {
        self.render()?;
        loop {
            tokio::select! {
                event = updates.next() => {
                    match event {
                        Some(event) => {
                            if self.board.apply_event(event) {
                                self.render()?;
                            }
                        }
                        None => return Ok(()),
                    }
                }
                _ = tokio::signal::ctrl_c() => return Ok(()),
            }
        }
    }

    fn render(&self) -> Result<()> {
        let title = match self.board.selection().filter {
            CategoryFilter::All => "# 할 일 목록".to_string(),
            CategoryFilter::Only(category) => format!("# 할 일 목록 ({})", category.label()),
        };
        let markdown = format!("{title}\n\n{}", self.board.view());
        self.renderer.render(&markdown)
    }
}

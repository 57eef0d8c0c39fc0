//! Haru CLI Application
//!
//! Command-line interface for the haru realtime todo tool.

mod args;
mod cli;
mod renderer;

use std::env;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Cli;
use haru_core::{BoardBuilder, StoreConfig};
use log::info;
use renderer::TerminalRenderer;

/// Assembles the remote store settings from flags and environment.
///
/// Connection credentials are injected configuration: flags win over
/// environment variables, and with no URL at all the board runs on the
/// in-process store.
fn resolve_config(database_url: Option<String>, auth_token: Option<String>) -> Option<StoreConfig> {
    let url = database_url.or_else(|| env::var("HARU_DATABASE_URL").ok())?;
    let token = auth_token.or_else(|| env::var("HARU_AUTH_TOKEN").ok());

    let mut config = StoreConfig::new(url).with_auth_token(token);
    if let Ok(collection) = env::var("HARU_COLLECTION") {
        config = config.with_collection(collection);
    }
    Some(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let Args {
        database_url,
        auth_token,
        no_color,
        command,
    } = Args::parse();

    let board = BoardBuilder::new()
        .with_config(resolve_config(database_url, auth_token))
        .build()
        .context("Failed to initialize board")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("haru started");

    Cli::new(board, renderer).run(command).await
}

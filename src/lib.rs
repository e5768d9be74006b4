//! `Newsdesk` - An interactive CLI for managing news articles
//!
//! Articles are stored one JSON file each under `<news-dir>/articles/`, and
//! `<news-dir>/index.json` lists them newest first. The menu creates, edits,
//! lists and deletes articles and keeps the index in step.

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod menu;
pub mod model;
pub mod prompt;
pub mod storage;
pub mod system;
pub mod utils;

use anyhow::Result;
use chrono::Local;
use cli::Args;
use config::NewsConfig;
use prompt::Prompter;
use std::io::{self, IsTerminal as _};
use storage::NewsStore;
use system::RealSystem;
use tracing::info;

/// Main entry point for the newsdesk library
///
/// Runs the interactive menu on stdin/stdout against the real filesystem.
pub fn run(args: &Args) -> Result<()> {
    let system = RealSystem::new();
    let config = NewsConfig::from_args(args);
    info!("Using news directory {}", config.news_dir().display());
    let store = NewsStore::new(&system, config);

    // stdout stays unlocked between writes so the interrupt handler can print
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let mut prompter = Prompter::new(io::stdin().lock(), stdout).with_screen_clearing(interactive);

    menu::run_menu(&mut prompter, &store, Local::now().date_naive())
}

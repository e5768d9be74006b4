//! # `Newsdesk`
//!
//! `Newsdesk` is an interactive command-line tool for editors of a site's
//! news section. Each article is a JSON file; an index file lists them in
//! display order, newest first.
//!
//! ## Usage
//!
//! ```sh
//! newsdesk                       # manage ./news
//! newsdesk --news-dir site/news  # manage another directory
//! ```
//!
//! The menu offers: create, edit, list, delete, exit. `RUST_LOG` or
//! `--verbose` turn on diagnostics on stderr.

use clap::Parser as _;
use newsdesk::cli::Args;
use newsdesk::error::{exit_code_for, is_input_closed};
use std::io::{self, BufRead as _, Write as _};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr so they never mix with the prompts
    let log_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();

    // Saved files are replaced atomically, so leaving mid-prompt loses only
    // the unsaved draft
    if let Err(err) = ctrlc::set_handler(|| {
        println!("\n\n👋 Programa interrompido pelo usuário. Até logo!\n");
        std::process::exit(0);
    }) {
        warn!("Could not install the interrupt handler: {err}");
    }

    match newsdesk::run(&args) {
        Ok(()) => std::process::exit(0),
        Err(err) if is_input_closed(&err) => std::process::exit(0),
        Err(err) => {
            error!("{err:#}");
            println!("\n❌ Erro inesperado: {err:#}");
            print!("\nPressione ENTER para sair...");
            let _ = io::stdout().flush();
            let mut line = String::new();
            let _ = io::stdin().lock().read_line(&mut line);
            std::process::exit(exit_code_for(&err));
        }
    }
}

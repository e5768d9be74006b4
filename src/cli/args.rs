use crate::config::DEFAULT_NEWS_DIR;
use clap::Parser;

/// Command-line arguments for newsdesk
///
/// Everything else happens in the interactive menu.
#[derive(Parser, Debug, Clone)]
#[command(name = "newsdesk")]
#[command(about = "An interactive CLI for managing news articles and their index")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Directory holding `index.json` and the `articles/` folder
    #[arg(long, value_name = "PATH", env = "NEWSDESK_DIR", default_value = DEFAULT_NEWS_DIR)]
    pub news_dir: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

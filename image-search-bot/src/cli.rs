//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "image-search-bot")]
#[command(about = "Telegram image search bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Query the providers and print the preprocessed candidates without sending anything.
    Search {
        /// Search term.
        query: String,
    },
}

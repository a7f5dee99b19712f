//! # image-search-bot
//!
//! Wires the Telegram transport, handler chain, image search providers and the image search
//! handler. Loads config from env and runs the REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::{build_handler_chain, build_image_search_handler, build_providers};
pub use config::{BotConfig, SearchConfig};
pub use runner::{run_bot, search_candidates};

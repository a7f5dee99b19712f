//! Entry points: run the bot, or run a search without Telegram.

use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot as CoreBot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use image_search_client::{default_preprocessor, Image, ImagesPreprocessor};
use tracing::{error, info, instrument, warn};

use crate::components::{build_handler_chain, build_image_search_handler, build_providers};
use crate::config::{BotConfig, SearchConfig};

/// Main entry: init logging, validate config, build components, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file).context("Initialize logging")?;
    config.validate()?;

    info!(
        log_file = %config.log_file,
        commands = ?config.search.commands,
        bing = ?config.search.bing,
        "Image search bot starting"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let bot_username = Arc::new(tokio::sync::RwLock::new(None));
    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));

    let handler = build_image_search_handler(&config.search, bot_adapter, bot_username.clone())?;
    let chain = build_handler_chain(handler);

    run_repl(teloxide_bot, chain, bot_username).await
}

/// Queries every provider in order and returns the preprocessed candidates of the first one
/// with results. Provider errors are logged and skipped like in the bot.
#[instrument(skip(config))]
pub async fn search_candidates(config: &SearchConfig, query: &str) -> Result<Vec<Image>> {
    config.validate()?;
    let preprocessor = default_preprocessor();

    for provider in build_providers(config)? {
        match provider.search(query).await {
            Ok(mut images) if !images.is_empty() => {
                preprocessor.process(&mut images);
                return Ok(images);
            }
            Ok(_) => warn!(provider = %provider.name(), "Provider failed to find images"),
            Err(e) => error!(provider = %provider.name(), error = %e, "Search failed"),
        }
    }
    Ok(Vec::new())
}

//! Builds providers, the image search handler and the handler chain from config.

use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::Bot as CoreBot;
use handler_chain::HandlerChain;
use image_handlers::{ImageFetcher, ImageSearchHandler, RandomPhrases};
use image_search_client::{default_preprocessor, BingSearchProvider, ImageProvider};
use tokio::sync::RwLock;
use tracing::info;

use crate::config::SearchConfig;

/// Providers in priority order.
pub fn build_providers(config: &SearchConfig) -> Result<Vec<Arc<dyn ImageProvider>>> {
    let bing = BingSearchProvider::new(config.bing.clone()).context("Build Bing search client")?;
    let providers: Vec<Arc<dyn ImageProvider>> = vec![Arc::new(bing)];
    info!(
        providers = ?providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
        "Image providers configured"
    );
    Ok(providers)
}

/// Image search handler with the default preprocessor and random phrases.
pub fn build_image_search_handler(
    config: &SearchConfig,
    bot: Arc<dyn CoreBot>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<ImageSearchHandler> {
    let fetcher =
        ImageFetcher::new(config.download_timeout)?.with_max_bytes(config.max_image_bytes);
    Ok(ImageSearchHandler::new(
        bot,
        build_providers(config)?,
        Arc::new(default_preprocessor()),
        Arc::new(RandomPhrases::default()),
        fetcher,
    )
    .with_commands(&config.commands)
    .with_bot_username(bot_username))
}

pub fn build_handler_chain(handler: ImageSearchHandler) -> HandlerChain {
    HandlerChain::new().add_handler(Arc::new(handler))
}

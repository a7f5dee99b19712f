//! Image search Handler: `/pic <term>` searches the configured providers in order and sends the
//! first image that downloads and uploads successfully.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{
    parse_command, Bot as CoreBot, Chat, Handler, HandlerResponse, Message, Photo, Result,
};
use image_search_client::{Image, ImageProvider, ImagesPreprocessor};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

use crate::error::ImageSendError;
use crate::fetch::ImageFetcher;
use crate::file_name::file_name_from_url;
use crate::phrases::Phrases;

/// Command names the handler answers to when none are configured.
pub const DEFAULT_COMMANDS: &[&str] = &["pic", "img"];

/// How one invocation ended. Exactly one outbound message corresponds to each variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// No search term; a "surprise" phrase was sent.
    Surprise,
    /// A photo from `provider` was sent.
    PhotoSent { provider: String, url: String },
    /// Every provider was exhausted; a "no results" reply was threaded to the request.
    NothingFound,
}

/// Image search Handler
///
/// Providers are tried in order. A provider error counts as an empty result. Each non-empty
/// result set goes through the preprocessor, then candidates are downloaded and sent one at a
/// time until the gateway accepts one.
#[derive(Clone)]
pub struct ImageSearchHandler {
    bot: Arc<dyn CoreBot>,
    providers: Vec<Arc<dyn ImageProvider>>,
    preprocessor: Arc<dyn ImagesPreprocessor>,
    phrases: Arc<dyn Phrases>,
    fetcher: ImageFetcher,
    commands: Vec<String>,
    bot_username: Arc<RwLock<Option<String>>>,
}

impl ImageSearchHandler {
    pub fn new(
        bot: Arc<dyn CoreBot>,
        providers: Vec<Arc<dyn ImageProvider>>,
        preprocessor: Arc<dyn ImagesPreprocessor>,
        phrases: Arc<dyn Phrases>,
        fetcher: ImageFetcher,
    ) -> Self {
        Self {
            bot,
            providers,
            preprocessor,
            phrases,
            fetcher,
            commands: DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect(),
            bot_username: Arc::new(RwLock::new(None)),
        }
    }

    /// Replaces the command names (without slash, case-insensitive).
    pub fn with_commands<I, S>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.commands = commands
            .into_iter()
            .map(|c| c.as_ref().trim_start_matches('/').to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();
        self
    }

    /// Shares the bot username cache filled by the runner, used to ignore `/pic@other_bot`.
    pub fn with_bot_username(mut self, bot_username: Arc<RwLock<Option<String>>>) -> Self {
        self.bot_username = bot_username;
        self
    }

    /// Runs one invocation for `message` with the already-extracted `argument`.
    ///
    /// Sends exactly one message. Only gateway failures on the final text replies are returned as
    /// errors; search and per-candidate failures are logged and absorbed.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle_command(
        &self,
        message: &Message,
        argument: Option<&str>,
    ) -> Result<SearchOutcome> {
        let Some(query) = argument.map(str::trim).filter(|a| !a.is_empty()) else {
            self.bot
                .send_message(&message.chat, &self.phrases.surprise())
                .await?;
            return Ok(SearchOutcome::Surprise);
        };

        for provider in &self.providers {
            let mut images = self.search(provider.as_ref(), query).await;
            if !images.is_empty() {
                if let Some(url) = self.send_first_available(&mut images, &message.chat, query).await
                {
                    return Ok(SearchOutcome::PhotoSent {
                        provider: provider.name().to_string(),
                        url,
                    });
                }
            }
            warn!(provider = %provider.name(), "Provider failed to find images");
        }

        self.bot.reply_to(message, &self.phrases.no()).await?;
        Ok(SearchOutcome::NothingFound)
    }

    async fn search(&self, provider: &dyn ImageProvider, query: &str) -> Vec<Image> {
        match provider.search(query).await {
            Ok(images) => {
                debug!(provider = %provider.name(), count = images.len(), "Search returned");
                images
            }
            Err(e) => {
                error!(provider = %provider.name(), error = %e, "Search failed");
                Vec::new()
            }
        }
    }

    /// Preprocesses `images` and tries them in order. Returns the URL of the sent image.
    async fn send_first_available(
        &self,
        images: &mut Vec<Image>,
        chat: &Chat,
        caption: &str,
    ) -> Option<String> {
        self.preprocessor.process(images);

        for image in images.iter() {
            info!(content_type = %image.content_type, url = %image.url, "Sending image");
            match self.send_image(&image.url, chat, caption).await {
                Ok(()) => return Some(image.url.clone()),
                Err(e) => error!(url = %image.url, error = %e, "Image send failed, retrying..."),
            }
        }
        None
    }

    async fn send_image(
        &self,
        url: &str,
        chat: &Chat,
        caption: &str,
    ) -> std::result::Result<(), ImageSendError> {
        let data = self.fetcher.fetch(url).await?;
        let photo = Photo::new(data, file_name_from_url(url));
        self.bot.send_photo(chat, photo, caption).await?;
        Ok(())
    }
}

#[async_trait]
impl Handler for ImageSearchHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(command) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };
        if !self.commands.iter().any(|c| *c == command.name) {
            return Ok(HandlerResponse::Continue);
        }
        if !command.is_addressed_to(self.bot_username.read().await.as_deref()) {
            debug!(target_bot = ?command.bot_username, "Command addressed to another bot, skipping");
            return Ok(HandlerResponse::Continue);
        }

        let outcome = self
            .handle_command(message, command.argument.as_deref())
            .await?;
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            outcome = ?outcome,
            "Image search command finished"
        );
        Ok(HandlerResponse::Stop)
    }
}

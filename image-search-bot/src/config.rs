//! Bot configuration: Telegram connectivity + logging ([`BotConfig`]) and image search
//! ([`SearchConfig`]). Loaded from env.

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;
use image_handlers::{DEFAULT_COMMANDS, DEFAULT_DOWNLOAD_TIMEOUT, DEFAULT_MAX_IMAGE_BYTES};
use image_search_client::BingSearchConfig;
use std::env;
use std::time::Duration;

const DEFAULT_LOG_FILE: &str = "logs/image-search-bot.log";

/// Search side of the bot: provider credentials, command names, download limits.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub bing: BingSearchConfig,
    /// IMAGE_COMMANDS, comma-separated, without slash
    pub commands: Vec<String>,
    /// IMAGE_DOWNLOAD_TIMEOUT_SECS
    pub download_timeout: Duration,
    /// IMAGE_MAX_BYTES
    pub max_image_bytes: u64,
}

impl SearchConfig {
    /// Loads from env: BING_API_ACCOUNT_KEY required; BING_API_ROOT, BING_TIMEOUT_SECS,
    /// IMAGE_COMMANDS, IMAGE_DOWNLOAD_TIMEOUT_SECS and IMAGE_MAX_BYTES optional.
    pub fn from_env() -> Result<Self> {
        let bing = BingSearchConfig::from_env().context("Load Bing search config")?;
        let commands = env::var("IMAGE_COMMANDS")
            .map(|s| parse_commands(&s))
            .unwrap_or_else(|_| DEFAULT_COMMANDS.iter().map(|c| c.to_string()).collect());
        let download_timeout = env::var("IMAGE_DOWNLOAD_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_DOWNLOAD_TIMEOUT);
        let max_image_bytes = env::var("IMAGE_MAX_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_IMAGE_BYTES);

        Ok(Self {
            bing,
            commands,
            download_timeout,
            max_image_bytes,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.bing.validate()?;
        if self.commands.is_empty() {
            anyhow::bail!("IMAGE_COMMANDS is set but contains no command names");
        }
        if self.download_timeout.is_zero() {
            anyhow::bail!("IMAGE_DOWNLOAD_TIMEOUT_SECS must be greater than 0");
        }
        if self.max_image_bytes == 0 {
            anyhow::bail!("IMAGE_MAX_BYTES must be greater than 0");
        }
        Ok(())
    }
}

/// Splits `"pic, /img ,,"` into `["pic", "img"]`.
fn parse_commands(s: &str) -> Vec<String> {
    s.split(',')
        .map(|c| c.trim().trim_start_matches('/').to_lowercase())
        .filter(|c| !c.is_empty())
        .collect()
}

/// Full bot config.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub search: SearchConfig,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let search = SearchConfig::from_env()?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            telegram,
            search,
            log_file,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.search.validate()
    }
}

//! Bing search config. Loaded from env: BING_API_ACCOUNT_KEY (required), BING_API_ROOT and
//! BING_TIMEOUT_SECS (optional).

use std::env;
use std::time::Duration;

use crate::error::SearchError;

/// Bing image search endpoint root; `/Image` is appended per request.
pub const DEFAULT_BING_API_ROOT: &str = "https://api.datamarket.azure.com/Bing/Search/v1";

/// Per-request timeout for search calls.
pub const DEFAULT_BING_TIMEOUT: Duration = Duration::from_secs(30);

/// Account key and endpoint for [`crate::BingSearchProvider`].
#[derive(Clone)]
pub struct BingSearchConfig {
    pub account_key: String,
    pub api_root: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for BingSearchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BingSearchConfig")
            .field("account_key", &mask_key(&self.account_key))
            .field("api_root", &self.api_root)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BingSearchConfig {
    pub fn new(account_key: impl Into<String>) -> Self {
        Self {
            account_key: account_key.into(),
            api_root: DEFAULT_BING_API_ROOT.to_string(),
            timeout: DEFAULT_BING_TIMEOUT,
        }
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads from env: BING_API_ACCOUNT_KEY required; BING_API_ROOT and BING_TIMEOUT_SECS optional.
    pub fn from_env() -> Result<Self, SearchError> {
        let account_key = env::var("BING_API_ACCOUNT_KEY")
            .map_err(|_| SearchError::Config("BING_API_ACCOUNT_KEY not set".to_string()))?;
        let mut config = Self::new(account_key);
        if let Ok(root) = env::var("BING_API_ROOT") {
            if !root.trim().is_empty() {
                config = config.with_api_root(root);
            }
        }
        if let Some(secs) = env::var("BING_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Rejects an empty account key, an unparsable API root and a zero timeout.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.account_key.trim().is_empty() {
            return Err(SearchError::Config("BING_API_ACCOUNT_KEY is empty".to_string()));
        }
        if reqwest::Url::parse(&self.api_root).is_err() {
            return Err(SearchError::Config(format!(
                "BING_API_ROOT is not a valid URL: {}",
                self.api_root
            )));
        }
        if self.timeout.is_zero() {
            return Err(SearchError::Config(
                "BING_TIMEOUT_SECS must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Masks an API key for logging: first 4 and last 2 characters, or `***` for short keys.
pub(crate) fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

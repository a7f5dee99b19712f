//! Downloads candidate images into memory for upload.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::ImageSendError;

pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Telegram's upload limit for photos.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// HTTP client for image downloads.
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
    max_bytes: u64,
}

impl ImageFetcher {
    /// Builds a client whose requests (connect + body) are capped at `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, ImageSendError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("image-search-bot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }

    /// Bodies larger than `max_bytes` are rejected without being buffered in full.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Fetches the full body of `url`. Non-2xx statuses, empty bodies and bodies over the size
    /// limit are errors.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageSendError> {
        let mut response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageSendError::Status(status.as_u16()));
        }

        if let Some(len) = response.content_length() {
            if len > self.max_bytes {
                return Err(ImageSendError::TooLarge(self.max_bytes));
            }
        }

        // Content-Length may be missing (chunked) or wrong, so the limit is enforced while reading.
        let mut data = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if (data.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(ImageSendError::TooLarge(self.max_bytes));
            }
            data.extend_from_slice(&chunk);
        }

        if data.is_empty() {
            return Err(ImageSendError::EmptyBody);
        }
        debug!(url = %url, size = data.len(), "Image downloaded");
        Ok(data)
    }
}

use async_trait::async_trait;

use crate::error::SearchError;
use crate::image::Image;

/// A pluggable image search backend. Providers are stateless; the bot tries them in configured
/// order and falls back to the next one on error or an empty result.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Searches for `query`, returning candidates in the provider's ranking order.
    async fn search(&self, query: &str) -> Result<Vec<Image>, SearchError>;
}

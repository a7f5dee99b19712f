//! Bing image search provider.
//!
//! Issues `GET {api_root}/Image?$format=json&Query='<term>'&$top=20&ImageFilters='Size:Medium'`
//! with HTTP basic auth (account key as both user and password) and maps `d.results[]` to
//! [`Image`] candidates.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::config::{mask_key, BingSearchConfig};
use crate::error::SearchError;
use crate::image::Image;
use crate::provider::ImageProvider;

/// Number of results requested per search.
pub const BING_PAGE_SIZE: u32 = 20;

/// Image size filter sent with every search.
pub const BING_SIZE_FILTER: &str = "'Size:Medium'";

#[derive(Debug, Deserialize)]
struct BingSearchResponse {
    d: BingSearchData,
}

#[derive(Debug, Deserialize)]
struct BingSearchData {
    #[serde(default)]
    results: Vec<BingImageResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BingImageResult {
    media_url: Option<String>,
    content_type: Option<String>,
}

/// Bing image search backed by reqwest.
#[derive(Debug, Clone)]
pub struct BingSearchProvider {
    client: Client,
    config: BingSearchConfig,
}

impl BingSearchProvider {
    /// Builds a client whose requests are capped at `config.timeout`.
    pub fn new(config: BingSearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Uses a caller-built client (timeouts, proxies).
    pub fn with_client(client: Client, config: BingSearchConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self) -> String {
        format!("{}/Image", self.config.api_root.trim_end_matches('/'))
    }
}

/// Wraps the term in OData string quotes, doubling embedded single quotes.
fn quote_query(query: &str) -> String {
    format!("'{}'", query.replace('\'', "''"))
}

#[async_trait]
impl ImageProvider for BingSearchProvider {
    fn name(&self) -> &str {
        "bing"
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Image>, SearchError> {
        let endpoint = self.endpoint();
        info!(
            endpoint = %endpoint,
            account_key = %mask_key(&self.config.account_key),
            "Bing image search request"
        );

        let top = BING_PAGE_SIZE.to_string();
        let quoted = quote_query(query);
        let response = self
            .client
            .get(&endpoint)
            .basic_auth(&self.config.account_key, Some(&self.config.account_key))
            .query(&[
                ("$format", "json"),
                ("Query", quoted.as_str()),
                ("$top", top.as_str()),
                ("ImageFilters", BING_SIZE_FILTER),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "Bing search returned error status");
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: BingSearchResponse = serde_json::from_str(&body)?;
        let images: Vec<Image> = parsed
            .d
            .results
            .into_iter()
            .filter_map(|r| {
                let url = r.media_url.filter(|u| !u.is_empty())?;
                Some(Image::new(url, r.content_type.unwrap_or_default()))
            })
            .collect();

        debug!(count = images.len(), "Bing search completed");
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_query() {
        assert_eq!(quote_query("cats"), "'cats'");
        assert_eq!(quote_query("rock 'n' roll"), "'rock ''n'' roll'");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider =
            BingSearchProvider::new(BingSearchConfig::new("k").with_api_root("http://h/v1/"))
                .unwrap();
        assert_eq!(provider.endpoint(), "http://h/v1/Image");
    }
}

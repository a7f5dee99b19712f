//! # image-search-client
//!
//! Image search providers and candidate preprocessing for the image search bot.
//!
//! - [`ImageProvider`]: a named search backend returning [`Image`] candidates.
//! - [`BingSearchProvider`]: Bing image search over HTTP, configured by [`BingSearchConfig`].
//! - [`ImagesPreprocessor`]: in-place filtering/reordering of candidates before sending.

mod bing;
mod config;
mod error;
mod image;
mod preprocessor;
mod provider;

pub use bing::{BingSearchProvider, BING_PAGE_SIZE, BING_SIZE_FILTER};
pub use config::{BingSearchConfig, DEFAULT_BING_API_ROOT, DEFAULT_BING_TIMEOUT};
pub use error::SearchError;
pub use image::Image;
pub use preprocessor::{
    default_preprocessor, CompositePreprocessor, ContentTypeFilter, DedupPreprocessor,
    ImagesPreprocessor, NoopPreprocessor, ShufflePreprocessor,
};
pub use provider::ImageProvider;

//! # image-handlers
//!
//! The image search command: [`ImageSearchHandler`] queries providers in order, preprocesses
//! their candidates, downloads them one by one and relays the first one the gateway accepts.

mod error;
mod fetch;
mod file_name;
mod image_search_handler;
mod phrases;

pub use error::ImageSendError;
pub use fetch::{ImageFetcher, DEFAULT_DOWNLOAD_TIMEOUT, DEFAULT_MAX_IMAGE_BYTES};
pub use file_name::{file_name_from_url, DEFAULT_IMAGE_EXTENSION};
pub use image_search_handler::{ImageSearchHandler, SearchOutcome, DEFAULT_COMMANDS};
pub use phrases::{Phrases, RandomPhrases};

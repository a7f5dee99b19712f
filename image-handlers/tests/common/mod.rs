//! Shared fakes for image-handlers integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Chat, Message, User};
use image_handlers::Phrases;
use image_search_client::{Image, ImageProvider, ImagesPreprocessor, SearchError};

pub const SURPRISE: &str = "surprise!";
pub const NOTHING_FOUND: &str = "nothing found";

/// Deterministic phrases so tests can assert on text.
pub struct FixedPhrases;

impl Phrases for FixedPhrases {
    fn surprise(&self) -> String {
        SURPRISE.to_string()
    }

    fn no(&self) -> String {
        NOTHING_FOUND.to_string()
    }
}

/// Provider returning a fixed result (`None` means a search error) and counting calls.
pub struct FakeProvider {
    name: String,
    result: Option<Vec<Image>>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn returning(name: &str, images: Vec<Image>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            result: Some(images),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            result: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageProvider for FakeProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn search(&self, _query: &str) -> Result<Vec<Image>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .ok_or_else(|| SearchError::Config("provider unavailable".to_string()))
    }
}

/// Reverses the candidate order; shows the preprocessor output is what gets iterated.
pub struct ReversePreprocessor;

impl ImagesPreprocessor for ReversePreprocessor {
    fn process(&self, images: &mut Vec<Image>) {
        images.reverse();
    }
}

pub fn create_test_message(content: &str) -> Message {
    Message {
        id: "77".to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "group".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

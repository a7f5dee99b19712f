//! Candidate preprocessing: filter, dedup and reorder search results in place before the bot
//! tries to send them.

use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::debug;

use crate::image::Image;

/// Mutates a provider's result set in place before send attempts.
pub trait ImagesPreprocessor: Send + Sync {
    fn process(&self, images: &mut Vec<Image>);
}

/// Leaves candidates untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl ImagesPreprocessor for NoopPreprocessor {
    fn process(&self, _images: &mut Vec<Image>) {}
}

/// Drops candidates whose URL was already seen, keeping the first occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DedupPreprocessor;

impl ImagesPreprocessor for DedupPreprocessor {
    fn process(&self, images: &mut Vec<Image>) {
        let mut seen = HashSet::new();
        images.retain(|image| seen.insert(image.url.clone()));
    }
}

/// Keeps candidates whose content type is in the allow list. Empty content types pass, since
/// providers do not always report one.
#[derive(Debug, Clone)]
pub struct ContentTypeFilter {
    allowed: Vec<String>,
}

impl ContentTypeFilter {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
        }
    }

    fn accepts(&self, content_type: &str) -> bool {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        essence.is_empty() || self.allowed.iter().any(|a| *a == essence)
    }
}

impl Default for ContentTypeFilter {
    /// Formats Telegram accepts as photos.
    fn default() -> Self {
        Self::new(["image/jpeg", "image/jpg", "image/png", "image/gif", "image/webp"])
    }
}

impl ImagesPreprocessor for ContentTypeFilter {
    fn process(&self, images: &mut Vec<Image>) {
        let before = images.len();
        images.retain(|image| self.accepts(&image.content_type));
        if images.len() < before {
            debug!(dropped = before - images.len(), "Filtered unsupported content types");
        }
    }
}

/// Shuffles candidates so repeated searches do not always send the top hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShufflePreprocessor;

impl ImagesPreprocessor for ShufflePreprocessor {
    fn process(&self, images: &mut Vec<Image>) {
        images.shuffle(&mut rand::thread_rng());
    }
}

/// Runs preprocessors in order.
#[derive(Clone, Default)]
pub struct CompositePreprocessor {
    steps: Vec<Arc<dyn ImagesPreprocessor>>,
}

impl CompositePreprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: Arc<dyn ImagesPreprocessor>) -> Self {
        self.steps.push(step);
        self
    }
}

impl ImagesPreprocessor for CompositePreprocessor {
    fn process(&self, images: &mut Vec<Image>) {
        for step in &self.steps {
            step.process(images);
        }
    }
}

/// Dedup, then content-type filter, then shuffle.
pub fn default_preprocessor() -> CompositePreprocessor {
    CompositePreprocessor::new()
        .then(Arc::new(DedupPreprocessor))
        .then(Arc::new(ContentTypeFilter::default()))
        .then(Arc::new(ShufflePreprocessor))
}

use serde::{Deserialize, Serialize};

/// One image candidate returned by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    /// Media type reported by the provider (e.g. `image/jpeg`); informative, may be empty.
    pub content_type: String,
}

impl Image {
    pub fn new(url: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            content_type: content_type.into(),
        }
    }
}

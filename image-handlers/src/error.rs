use dbot_core::DbotError;
use thiserror::Error;

/// Why one candidate could not be relayed. Always absorbed by the handler, which moves on to the
/// next candidate.
#[derive(Error, Debug)]
pub enum ImageSendError {
    #[error("Image download failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Image download returned status {0}")]
    Status(u16),

    #[error("Image download returned an empty body")]
    EmptyBody,

    #[error("Image exceeds the {0} byte limit")]
    TooLarge(u64),

    #[error("Photo send failed: {0}")]
    Gateway(#[from] DbotError),
}

//! Bot abstraction for sending text replies and photos.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute
//! a recording mock.

use crate::error::{DbotError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Downloaded image content ready to be uploaded. Owns the bytes; dropped once the send attempt
/// that consumed it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub data: Vec<u8>,
    pub file_name: String,
}

impl Photo {
    pub fn new(data: Vec<u8>, file_name: impl Into<String>) -> Self {
        Self {
            data,
            file_name: file_name.into(),
        }
    }
}

/// Abstraction for the messaging gateway. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text reply threaded to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Uploads a photo with a caption. Fails with [`DbotError::Bot`] when the transport rejects it.
    async fn send_photo(&self, chat: &Chat, photo: Photo, caption: &str) -> Result<()>;
}

/// Parses a message id string into an i32. Used to thread replies.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id for reply: {}", s)))
}

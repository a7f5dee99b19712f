//! Mock implementation of [`dbot_core::Bot`] that records every outbound message.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, Message, Photo, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Reply { chat_id: i64, reply_to: String, text: String },
    Photo { chat_id: i64, file_name: String, size: usize, caption: String },
}

/// Records sends; `send_photo` fails for file names listed in `reject_photos`.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    reject_photos: HashSet<String>,
    photo_attempts: Mutex<Vec<String>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `send_photo` fail for these file names, like a gateway rejecting the upload.
    pub fn rejecting(file_names: &[&str]) -> Self {
        Self {
            reject_photos: file_names.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn photos(&self) -> Vec<Sent> {
        self.sent()
            .into_iter()
            .filter(|s| matches!(s, Sent::Photo { .. }))
            .collect()
    }

    /// File names of every `send_photo` call, including rejected ones.
    pub fn photo_attempts(&self) -> Vec<String> {
        self.photo_attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Reply {
            chat_id: message.chat.id,
            reply_to: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_photo(&self, chat: &Chat, photo: Photo, caption: &str) -> Result<()> {
        self.photo_attempts
            .lock()
            .unwrap()
            .push(photo.file_name.clone());
        if self.reject_photos.contains(&photo.file_name) {
            return Err(DbotError::Bot("Bad Request: IMAGE_PROCESS_FAILED".to_string()));
        }
        self.sent.lock().unwrap().push(Sent::Photo {
            chat_id: chat.id,
            file_name: photo.file_name,
            size: photo.data.len(),
            caption: caption.to_string(),
        });
        Ok(())
    }
}

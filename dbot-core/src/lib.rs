//! # dbot-core
//!
//! Core types and traits for the image search bot: [`Bot`], [`Handler`], message and user types,
//! command parsing and tracing initialization. Transport-agnostic; used by dbot-telegram,
//! handler-chain and image-handlers.

pub mod bot;
pub mod command;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot, Photo};
pub use command::{parse_command, Command};
pub use error::{DbotError, Result};
pub use logger::{init_console_tracing, init_tracing};
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};

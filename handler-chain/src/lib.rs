//! # Handler chain
//!
//! Passes each message to a sequence of handlers. The first handler that returns
//! [`HandlerResponse::Stop`] ends the chain; a handler error ends it as well and is returned.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

/// Ordered list of handlers sharing one incoming message.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler; handlers run in insertion order.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs handlers until one returns Stop. Returns Stop in that case, Continue if no handler
    /// claimed the message.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for handler in &self.handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            debug!(handler = %handler_name, "step: handler processing");

            let response = handler.handle(message).await.map_err(|e| {
                error!(handler = %handler_name, error = %e, "Handler failed");
                e
            })?;

            if response == HandlerResponse::Stop {
                info!(handler = %handler_name, "step: handler chain stopped by handler");
                return Ok(HandlerResponse::Stop);
            }
        }

        debug!("step: no handler claimed the message");
        Ok(HandlerResponse::Continue)
    }
}

// Tests live in tests/handler_chain_test.rs

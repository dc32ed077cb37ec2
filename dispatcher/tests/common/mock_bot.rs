//! Mock implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Sends every call as a [`BotCall`] over an unbounded channel so tests can assert on what the
//! dispatcher and handlers sent without a platform connection.

use async_trait::async_trait;
use dbot_core::{Bot, InteractionEvent, Reply, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)] // not every test file inspects every variant
pub enum BotCall {
    Reply { interaction_id: String, reply: Reply },
    EditReply { interaction_id: String, content: String },
    DeleteReply { interaction_id: String },
    DeleteMessage { channel_id: String, message_id: String },
}

pub struct MockBot {
    tx: mpsc::UnboundedSender<BotCall>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for recorded calls.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { tx }), rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn reply(&self, event: &InteractionEvent, reply: Reply) -> Result<()> {
        let _ = self.tx.send(BotCall::Reply {
            interaction_id: event.id.clone(),
            reply,
        });
        Ok(())
    }

    async fn edit_reply(&self, event: &InteractionEvent, content: &str) -> Result<()> {
        let _ = self.tx.send(BotCall::EditReply {
            interaction_id: event.id.clone(),
            content: content.to_string(),
        });
        Ok(())
    }

    async fn delete_reply(&self, event: &InteractionEvent) -> Result<()> {
        let _ = self.tx.send(BotCall::DeleteReply {
            interaction_id: event.id.clone(),
        });
        Ok(())
    }

    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<()> {
        let _ = self.tx.send(BotCall::DeleteMessage {
            channel_id: channel_id.to_string(),
            message_id: message_id.to_string(),
        });
        Ok(())
    }

    fn gateway_ping(&self) -> Duration {
        Duration::from_millis(42)
    }
}

//! Bot abstraction for answering interactions.
//!
//! [`Bot`] is transport-agnostic: the platform client implements it, handlers and the dispatcher only call it.

use crate::error::Result;
use crate::types::{InteractionEvent, Reply};
use async_trait::async_trait;
use std::time::Duration;

/// Sends, edits and deletes interaction replies. Implementations map to the platform transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends the initial reply to an interaction.
    async fn reply(&self, event: &InteractionEvent, reply: Reply) -> Result<()>;
    /// Replaces the content of the reply previously sent for `event`.
    async fn edit_reply(&self, event: &InteractionEvent, content: &str) -> Result<()>;
    /// Deletes the reply previously sent for `event`.
    async fn delete_reply(&self, event: &InteractionEvent) -> Result<()>;
    /// Deletes an arbitrary message in a channel.
    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<()>;
    /// Last measured gateway heartbeat round trip.
    fn gateway_ping(&self) -> Duration;
}

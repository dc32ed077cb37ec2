use async_trait::async_trait;
use dbot_core::{
    ContextDefinition, ContextInteraction, ContextSurface, HandlerError, InteractionContext, Reply,
    Result,
};
use std::time::Duration;
use tracing::{debug, instrument};

const REPLY_TTL: Duration = Duration::from_secs(5);

/// Message context action: deletes the targeted message and confirms with a short-lived reply.
pub struct DeleteMessageInteraction {
    definition: ContextDefinition,
    reply_ttl: Duration,
}

impl DeleteMessageInteraction {
    pub fn new() -> Self {
        Self {
            definition: ContextDefinition::new(ContextSurface::Message, "delete Message"),
            reply_ttl: REPLY_TTL,
        }
    }

    /// How long the confirmation stays before it is deleted.
    pub fn with_reply_ttl(mut self, reply_ttl: Duration) -> Self {
        self.reply_ttl = reply_ttl;
        self
    }
}

impl Default for DeleteMessageInteraction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContextInteraction for DeleteMessageInteraction {
    fn definition(&self) -> &ContextDefinition {
        &self.definition
    }

    #[instrument(skip(self, ctx), fields(channel_id = %ctx.event.channel_id))]
    async fn on_message(&self, ctx: &InteractionContext) -> Result<()> {
        let message_id = ctx
            .event
            .target_id
            .as_deref()
            .ok_or(HandlerError::MissingTarget)?;

        ctx.bot
            .delete_message(&ctx.event.channel_id, message_id)
            .await?;
        ctx.bot
            .reply(
                &ctx.event,
                Reply::public(format!("Deleted message with id {}", message_id)),
            )
            .await?;

        tokio::time::sleep(self.reply_ttl).await;
        debug!(message_id = %message_id, "Removing delete confirmation");
        ctx.bot.delete_reply(&ctx.event).await
    }
}

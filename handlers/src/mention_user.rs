use async_trait::async_trait;
use dbot_core::{
    ContextDefinition, ContextInteraction, ContextSurface, HandlerError, InteractionContext, Reply,
    Result,
};

/// User context action: mentions the targeted user.
pub struct MentionUserInteraction {
    definition: ContextDefinition,
}

impl MentionUserInteraction {
    pub fn new() -> Self {
        Self {
            definition: ContextDefinition::new(ContextSurface::User, "mention User"),
        }
    }
}

impl Default for MentionUserInteraction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContextInteraction for MentionUserInteraction {
    fn definition(&self) -> &ContextDefinition {
        &self.definition
    }

    async fn on_user(&self, ctx: &InteractionContext) -> Result<()> {
        let user_id = ctx
            .event
            .target_id
            .as_deref()
            .ok_or(HandlerError::MissingTarget)?;
        ctx.bot
            .reply(
                &ctx.event,
                Reply::public(format!("Mentioned user: <@{}>", user_id)),
            )
            .await
    }
}

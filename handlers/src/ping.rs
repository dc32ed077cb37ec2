use async_trait::async_trait;
use dbot_core::{CommandDefinition, InteractionContext, Reply, Result, SlashCommand};
use tracing::{info, instrument};

/// Replies with a placeholder, then edits it to show the gateway latency.
pub struct PingCommand {
    definition: CommandDefinition,
}

impl PingCommand {
    pub fn new() -> Self {
        Self {
            definition: CommandDefinition::new("ping", "Shows the ping of the bot")
                .help("Measures the latency between the bot and the gateway."),
        }
    }
}

impl Default for PingCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlashCommand for PingCommand {
    fn definition(&self) -> &CommandDefinition {
        &self.definition
    }

    #[instrument(skip(self, ctx), fields(user_id = %ctx.event.user_id))]
    async fn execute(&self, ctx: &InteractionContext) -> Result<()> {
        ctx.bot
            .reply(&ctx.event, Reply::public("Calculating ping..."))
            .await?;
        let ping = ctx.bot.gateway_ping().as_millis();
        info!(ping_ms = ping as u64, "Gateway ping");
        ctx.bot
            .edit_reply(&ctx.event, &format!("Ping: {}ms", ping))
            .await
    }
}

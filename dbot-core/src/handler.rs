//! Handler traits: the behavior half of the handler contract.
//!
//! [`SlashCommand`] and [`ContextInteraction`] are implemented by handler types; [`Handler`] is the
//! closed set the registry stores and the dispatcher routes to.

use async_trait::async_trait;
use std::sync::Arc;

use crate::bot::Bot;
use crate::cooldown::CooldownSpec;
use crate::definition::{CommandDefinition, ContextDefinition, ContextSurface};
use crate::error::{HandlerError, Result};
use crate::types::{InteractionEvent, InteractionSurface};

/// Everything a handler needs to answer one interaction. Owned so execution can be spawned.
#[derive(Clone)]
pub struct InteractionContext {
    pub event: InteractionEvent,
    pub bot: Arc<dyn Bot>,
}

impl InteractionContext {
    pub fn new(event: InteractionEvent, bot: Arc<dyn Bot>) -> Self {
        Self { event, bot }
    }
}

/// A slash command: metadata plus an execute callback. Sending the response is the command's job.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    fn definition(&self) -> &CommandDefinition;

    async fn execute(&self, ctx: &InteractionContext) -> Result<()>;
}

/// A context-menu interaction. Implement the callback matching [`ContextDefinition::surface`];
/// the other one reports [`HandlerError::UnsupportedSurface`].
#[async_trait]
pub trait ContextInteraction: Send + Sync {
    fn definition(&self) -> &ContextDefinition;

    async fn on_message(&self, ctx: &InteractionContext) -> Result<()> {
        Err(unsupported(self.definition().default_name(), ctx.event.surface))
    }

    async fn on_user(&self, ctx: &InteractionContext) -> Result<()> {
        Err(unsupported(self.definition().default_name(), ctx.event.surface))
    }
}

fn unsupported(handler: &str, surface: InteractionSurface) -> crate::error::DbotError {
    HandlerError::UnsupportedSurface {
        handler: handler.to_string(),
        surface,
    }
    .into()
}

/// A registered handler of either kind.
#[derive(Clone)]
pub enum Handler {
    Command(Arc<dyn SlashCommand>),
    Context(Arc<dyn ContextInteraction>),
}

impl Handler {
    pub fn command(command: impl SlashCommand + 'static) -> Self {
        Handler::Command(Arc::new(command))
    }

    pub fn context(interaction: impl ContextInteraction + 'static) -> Self {
        Handler::Context(Arc::new(interaction))
    }

    /// Default-locale name; the dispatch key.
    pub fn default_name(&self) -> &str {
        match self {
            Handler::Command(c) => c.definition().default_name(),
            Handler::Context(i) => i.definition().default_name(),
        }
    }

    pub fn cooldown(&self) -> Option<&CooldownSpec> {
        match self {
            Handler::Command(c) => c.definition().cooldown.as_ref(),
            Handler::Context(i) => i.definition().cooldown.as_ref(),
        }
    }

    pub fn is_context(&self) -> bool {
        matches!(self, Handler::Context(_))
    }

    /// Whether this handler implements the callback for `surface`.
    pub fn accepts(&self, surface: InteractionSurface) -> bool {
        match (self, surface) {
            (Handler::Command(_), InteractionSurface::Slash) => true,
            (Handler::Context(i), InteractionSurface::MessageContext) => {
                i.definition().surface == ContextSurface::Message
            }
            (Handler::Context(i), InteractionSurface::UserContext) => {
                i.definition().surface == ContextSurface::User
            }
            _ => false,
        }
    }

    /// Runs the callback for the event's surface. A mismatch is [`HandlerError::UnsupportedSurface`].
    pub async fn execute(&self, ctx: &InteractionContext) -> Result<()> {
        match (self, ctx.event.surface) {
            (Handler::Command(c), InteractionSurface::Slash) => c.execute(ctx).await,
            (Handler::Context(i), InteractionSurface::MessageContext) => i.on_message(ctx).await,
            (Handler::Context(i), InteractionSurface::UserContext) => i.on_user(ctx).await,
            (handler, surface) => Err(unsupported(handler.default_name(), surface)),
        }
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.is_context() { "Context" } else { "Command" };
        f.debug_tuple(kind).field(&self.default_name()).finish()
    }
}

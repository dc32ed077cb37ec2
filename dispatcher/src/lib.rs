//! # Dispatcher
//!
//! Turns one inbound interaction event into one decision: run a handler, answer with a cooldown
//! message, answer "not available", or reject an unsupported surface.
//!
//! Steps per event:
//! 1. Resolve the handler by case-insensitive default name (slash events among slash commands,
//!    context events among context interactions). Miss → not available.
//! 2. Check the handler implements the event's surface. Mismatch → unsupported; no cooldown is consumed.
//! 3. Ask the cooldown engine. Limited → localized cooldown message with the relative expiry time.
//! 4. Otherwise execute. [`Dispatcher::dispatch`] spawns the handler and does not wait for it.

mod message;

pub use message::{
    COMMAND_COOLDOWN_KEY, DEFAULT_COMMAND_COOLDOWN, DEFAULT_INTERACTION_COOLDOWN,
    INTERACTION_COOLDOWN_KEY, NOT_AVAILABLE,
};

use cooldown::{relative_timestamp, Clock, CooldownEngine, SystemClock};
use dbot_core::{
    Bot, CooldownSpec, Handler, HandlerError, InteractionContext, InteractionEvent,
    InteractionSurface, Reply, Result, Scope,
};
use localization::Localizer;
use registry::Registry;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// What to do with one event.
#[derive(Debug)]
pub enum Decision {
    /// Run this handler; it sends its own response.
    Execute(Handler),
    /// The invoker is limited; send this ephemeral reply.
    Cooldown(Reply),
    /// No handler has this name; send this ephemeral reply.
    NotAvailable(Reply),
    /// The handler exists but does not implement the event's surface.
    Unsupported {
        handler: String,
        surface: InteractionSurface,
    },
}

/// Id the cooldown window for `scope` is tracked under. None when the event has no such target
/// (a guild scope in a direct message), in which case the invocation is not limited.
fn cooldown_target(event: &InteractionEvent, scope: Scope) -> Option<&str> {
    match scope {
        Scope::User => Some(event.user_id.as_str()),
        Scope::Channel => Some(event.channel_id.as_str()),
        Scope::Guild => event.guild_id.as_deref(),
        Scope::Unknown => None,
    }
}

pub struct Dispatcher<C: Clock = SystemClock> {
    registry: Arc<Registry>,
    cooldowns: Arc<CooldownEngine<C>>,
    localizer: Arc<Localizer>,
    bot: Arc<dyn Bot>,
}

impl<C: Clock> Dispatcher<C> {
    pub fn new(
        registry: Arc<Registry>,
        cooldowns: Arc<CooldownEngine<C>>,
        localizer: Arc<Localizer>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self {
            registry,
            cooldowns,
            localizer,
            bot,
        }
    }

    /// Decides what to do with `event`. Records a new cooldown window when the handler is allowed
    /// to run and declares a cooldown.
    #[instrument(skip(self, event), fields(name = %event.name, user_id = %event.user_id, surface = %event.surface))]
    pub fn decide(&self, event: &InteractionEvent) -> Decision {
        let Some(handler) = self.registry.resolve(&event.name, event.surface) else {
            debug!("step: no handler registered, not available");
            return Decision::NotAvailable(Reply::ephemeral(NOT_AVAILABLE));
        };

        if !handler.accepts(event.surface) {
            warn!(handler = %handler.default_name(), "step: handler does not support surface");
            return Decision::Unsupported {
                handler: handler.default_name().to_string(),
                surface: event.surface,
            };
        }

        if let Some(spec) = handler.cooldown().copied() {
            if let Some(target) = cooldown_target(event, spec.scope) {
                if self
                    .cooldowns
                    .is_on_cooldown(target, handler.default_name(), Some(&spec))
                {
                    info!(
                        handler = %handler.default_name(),
                        scope = %spec.scope_string(),
                        target = %target,
                        "step: on cooldown"
                    );
                    return Decision::Cooldown(self.cooldown_reply(
                        event,
                        target,
                        handler.default_name(),
                        &spec,
                    ));
                }
            }
        }

        info!(handler = %handler.default_name(), "step: execute");
        Decision::Execute(handler)
    }

    fn cooldown_reply(
        &self,
        event: &InteractionEvent,
        target: &str,
        handler_name: &str,
        spec: &CooldownSpec,
    ) -> Reply {
        let end = self.cooldowns.end_time(spec.scope, target, handler_name);
        let template = message::cooldown_template(&self.localizer, event.surface, event.locale);
        Reply::ephemeral(message::render(&template, &relative_timestamp(end)))
    }

    /// Acts on [`decide`](Self::decide). Cooldown and not-available replies are sent through the
    /// bot; an unsupported surface is [`HandlerError::UnsupportedSurface`]. An executing handler
    /// runs on its own task, and its handle is returned without being awaited.
    #[instrument(skip(self, event), fields(interaction_id = %event.id))]
    pub async fn dispatch(&self, event: InteractionEvent) -> Result<Option<JoinHandle<Result<()>>>> {
        match self.decide(&event) {
            Decision::Execute(handler) => {
                let ctx = InteractionContext::new(event, self.bot.clone());
                Ok(Some(tokio::spawn(async move {
                    let result = handler.execute(&ctx).await;
                    if let Err(e) = &result {
                        error!(
                            handler = %handler.default_name(),
                            interaction_id = %ctx.event.id,
                            error = %e,
                            "Handler failed"
                        );
                    }
                    result
                })))
            }
            Decision::Cooldown(reply) | Decision::NotAvailable(reply) => {
                self.bot.reply(&event, reply).await?;
                Ok(None)
            }
            Decision::Unsupported { handler, surface } => {
                Err(HandlerError::UnsupportedSurface { handler, surface }.into())
            }
        }
    }
}

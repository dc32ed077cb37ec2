//! # Registry
//!
//! Builds the process-wide set of handlers from an explicit list of factories, and partitions their
//! metadata into a global and a home-guild publication.
//!
//! Handlers are split into two sets keyed by default name: slash commands and context interactions.
//! A name may appear once per set (compared case-insensitively); the first registration wins.
//! A factory that fails or panics is recorded and skipped, never aborting discovery.

mod metadata;
mod publish;

pub use metadata::{CommandKind, CommandMetadata, OptionMetadata};
pub use publish::{MetadataPublisher, Publication};

use dbot_core::{
    ContextInteraction, CooldownSpec, CooldownSpecError, Handler, InteractionSurface, SlashCommand,
};
use localization::Localizer;
use std::any::Any;
use std::panic;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument};

/// A named constructor for one handler type.
#[derive(Clone, Copy)]
pub struct HandlerFactory {
    pub type_name: &'static str,
    pub build: fn() -> anyhow::Result<Handler>,
}

impl HandlerFactory {
    pub const fn new(type_name: &'static str, build: fn() -> anyhow::Result<Handler>) -> Self {
        Self { type_name, build }
    }
}

impl std::fmt::Debug for HandlerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerFactory")
            .field("type_name", &self.type_name)
            .finish()
    }
}

#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Failed to construct {type_name}: {reason}")]
    Construction {
        type_name: &'static str,
        reason: String,
    },

    #[error("{type_name} panicked during construction: {reason}")]
    Panicked {
        type_name: &'static str,
        reason: String,
    },

    #[error("A {kind} named '{name}' is already registered")]
    DuplicateName { kind: &'static str, name: String },

    #[error("Invalid cooldown on '{name}': {source}")]
    InvalidCooldown {
        name: String,
        #[source]
        source: CooldownSpecError,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryOptions {
    /// Reject cooldowns with unknown unit/scope or zero duration instead of letting them fail open.
    pub strict_cooldowns: bool,
}

/// Registered slash commands and context interactions, in registration order.
#[derive(Default)]
pub struct Registry {
    commands: Vec<Arc<dyn SlashCommand>>,
    interactions: Vec<Arc<dyn ContextInteraction>>,
    errors: Vec<RegistrationError>,
    options: RegistryOptions,
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

impl Registry {
    pub fn new(options: RegistryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Constructs every factory once and registers the results. Failures are collected in
    /// [`errors`](Self::errors).
    #[instrument(skip(factories))]
    pub fn discover(
        factories: impl IntoIterator<Item = HandlerFactory>,
        options: RegistryOptions,
    ) -> Self {
        let mut registry = Self::new(options);
        for factory in factories {
            let built = match panic::catch_unwind(factory.build) {
                Ok(Ok(handler)) => handler,
                Ok(Err(e)) => {
                    registry.record(RegistrationError::Construction {
                        type_name: factory.type_name,
                        reason: format!("{:#}", e),
                    });
                    continue;
                }
                Err(payload) => {
                    registry.record(RegistrationError::Panicked {
                        type_name: factory.type_name,
                        reason: panic_reason(payload),
                    });
                    continue;
                }
            };
            if let Err(e) = registry.register(built) {
                registry.record(e);
            }
        }
        info!(
            commands = registry.commands.len(),
            interactions = registry.interactions.len(),
            errors = registry.errors.len(),
            "Handler discovery finished"
        );
        registry
    }

    fn record(&mut self, e: RegistrationError) {
        error!(error = %e, "Skipping handler");
        self.errors.push(e);
    }

    fn check_cooldown(&self, name: &str, spec: Option<&CooldownSpec>) -> Result<(), RegistrationError> {
        match spec {
            Some(spec) if self.options.strict_cooldowns => {
                spec.validate()
                    .map_err(|source| RegistrationError::InvalidCooldown {
                        name: name.to_string(),
                        source,
                    })
            }
            _ => Ok(()),
        }
    }

    /// Adds one handler to its set.
    pub fn register(&mut self, handler: Handler) -> Result<(), RegistrationError> {
        let name = handler.default_name().to_string();
        self.check_cooldown(&name, handler.cooldown())?;

        let (kind, taken) = if handler.is_context() {
            ("context interaction", self.find_interaction(&name).is_some())
        } else {
            ("slash command", self.find_command(&name).is_some())
        };
        if taken {
            return Err(RegistrationError::DuplicateName { kind, name });
        }

        match handler {
            Handler::Command(c) => {
                info!(name = %name, "Registered slash command");
                self.commands.push(c);
            }
            Handler::Context(i) => {
                info!(name = %name, surface = ?i.definition().surface, "Registered context interaction");
                self.interactions.push(i);
            }
        }
        Ok(())
    }

    pub fn commands(&self) -> &[Arc<dyn SlashCommand>] {
        &self.commands
    }

    pub fn interactions(&self) -> &[Arc<dyn ContextInteraction>] {
        &self.interactions
    }

    /// Every handler: commands first, then context interactions.
    pub fn handlers(&self) -> impl Iterator<Item = Handler> + '_ {
        self.commands
            .iter()
            .cloned()
            .map(Handler::Command)
            .chain(self.interactions.iter().cloned().map(Handler::Context))
    }

    pub fn errors(&self) -> &[RegistrationError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.commands.len() + self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slash command whose default name equals `name`, ignoring case.
    pub fn find_command(&self, name: &str) -> Option<&Arc<dyn SlashCommand>> {
        self.commands
            .iter()
            .find(|c| c.definition().default_name().eq_ignore_ascii_case(name))
    }

    /// Context interaction whose default name equals `name`, ignoring case.
    pub fn find_interaction(&self, name: &str) -> Option<&Arc<dyn ContextInteraction>> {
        self.interactions
            .iter()
            .find(|i| i.definition().default_name().eq_ignore_ascii_case(name))
    }

    /// The handler an event with this name and surface is routed to. Slash events search commands,
    /// context events search context interactions; the handler's own surface is not checked here.
    pub fn resolve(&self, name: &str, surface: InteractionSurface) -> Option<Handler> {
        if surface.is_context() {
            self.find_interaction(name).cloned().map(Handler::Context)
        } else {
            self.find_command(name).cloned().map(Handler::Command)
        }
    }

    /// Partitions metadata of every handler into global and home-guild records. Each call builds a
    /// fresh publication.
    #[instrument(skip(self, localizer))]
    pub fn publish(&self, localizer: &Localizer) -> Publication {
        let mut publication = Publication::default();

        for command in &self.commands {
            let definition = command.definition();
            let record = CommandMetadata::from_command(definition, localizer);
            if definition.home_guild_only {
                publication.home_guild.push(record);
            } else {
                publication.global.push(record);
            }
        }
        for interaction in &self.interactions {
            let definition = interaction.definition();
            let record = CommandMetadata::from_context(definition);
            if definition.home_guild_only {
                publication.home_guild.push(record);
            } else {
                publication.global.push(record);
            }
        }

        info!(
            global = publication.global.len(),
            home_guild = publication.home_guild.len(),
            "Built command publication"
        );
        publication
    }
}

//! # dbot-core
//!
//! Core types and traits for the interaction bot: platform [`Locale`]s, inbound [`InteractionEvent`]s,
//! handler definitions ([`CommandDefinition`], [`ContextDefinition`]), the handler traits
//! ([`SlashCommand`], [`ContextInteraction`]), the [`Bot`] transport trait, cooldown specs,
//! and tracing initialization. Transport-agnostic; used by registry, dispatcher and handlers.

pub mod bot;
pub mod cooldown;
pub mod definition;
pub mod error;
pub mod handler;
pub mod locale;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use cooldown::{CooldownSpec, CooldownSpecError, Scope, TimeUnit};
pub use definition::{
    CommandDefinition, CommandOption, ContextDefinition, ContextSurface, LocalizedText,
    MemberPermissions, OptionKind, Subcommand, SubcommandGroup,
};
pub use error::{DbotError, HandlerError, Result};
pub use handler::{ContextInteraction, Handler, InteractionContext, SlashCommand};
pub use locale::Locale;
pub use logger::init_tracing;
pub use types::{InteractionEvent, InteractionSurface, Reply};

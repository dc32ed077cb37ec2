//! Core types: inbound interaction event, interaction surface, and reply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::locale::Locale;

/// Where an interaction was invoked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionSurface {
    /// Typed slash command.
    Slash,
    /// Context menu on a message.
    MessageContext,
    /// Context menu on a user.
    UserContext,
}

impl InteractionSurface {
    pub fn is_context(self) -> bool {
        !matches!(self, InteractionSurface::Slash)
    }
}

impl fmt::Display for InteractionSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InteractionSurface::Slash => "slash",
            InteractionSurface::MessageContext => "message-context",
            InteractionSurface::UserContext => "user-context",
        };
        f.write_str(s)
    }
}

/// One inbound interaction. Ids are opaque platform-assigned strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub id: String,
    /// Invocation name as typed/clicked by the user; matched case-insensitively.
    pub name: String,
    pub user_id: String,
    pub channel_id: String,
    /// None for direct messages.
    pub guild_id: Option<String>,
    pub locale: Locale,
    pub surface: InteractionSurface,
    /// Targeted message id (message context) or user id (user context).
    pub target_id: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl InteractionEvent {
    /// Slash event in a guild channel with the default locale.
    pub fn slash(
        name: impl Into<String>,
        user_id: impl Into<String>,
        channel_id: impl Into<String>,
        guild_id: Option<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            user_id: user_id.into(),
            channel_id: channel_id.into(),
            guild_id,
            locale: Locale::DEFAULT,
            surface: InteractionSurface::Slash,
            target_id: None,
            received_at: Utc::now(),
        }
    }

    /// Context-menu event on `target_id`.
    pub fn context(
        surface: InteractionSurface,
        name: impl Into<String>,
        user_id: impl Into<String>,
        channel_id: impl Into<String>,
        guild_id: Option<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            surface,
            target_id: Some(target_id.into()),
            ..Self::slash(name, user_id, channel_id, guild_id)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// Reply to an interaction. Ephemeral replies are visible only to the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub content: String,
    pub ephemeral: bool,
}

impl Reply {
    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}

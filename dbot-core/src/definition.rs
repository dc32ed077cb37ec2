//! Handler definitions: the metadata half of the handler contract.
//!
//! A [`CommandDefinition`] describes a slash command (names, descriptions, option tree, flags, cooldown);
//! a [`ContextDefinition`] describes a context-menu interaction on a message or a user.
//! Definitions are built once in the handler's constructor and never mutated afterwards.

use std::collections::BTreeMap;

use crate::cooldown::CooldownSpec;
use crate::locale::Locale;

/// Locale → text map that always holds the [`Locale::DEFAULT`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText(BTreeMap<Locale, String>);

impl LocalizedText {
    pub fn new(default: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(Locale::DEFAULT, default.into());
        Self(map)
    }

    /// Adds or replaces a translation. Setting [`Locale::DEFAULT`] replaces the default text;
    /// [`Locale::Unknown`] is ignored.
    pub fn with(mut self, locale: Locale, text: impl Into<String>) -> Self {
        if locale != Locale::Unknown {
            self.0.insert(locale, text.into());
        }
        self
    }

    pub fn default_text(&self) -> &str {
        self.0
            .get(&Locale::DEFAULT)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.0.get(&locale).map(String::as_str)
    }

    /// More than the default entry.
    pub fn is_multilingual(&self) -> bool {
        self.0.len() > 1
    }

    pub fn as_map(&self) -> &BTreeMap<Locale, String> {
        &self.0
    }
}

/// Value type of a slash command option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number,
    Attachment,
}

impl OptionKind {
    /// Platform option type code.
    pub fn code(self) -> u8 {
        match self {
            OptionKind::String => 3,
            OptionKind::Integer => 4,
            OptionKind::Boolean => 5,
            OptionKind::User => 6,
            OptionKind::Channel => 7,
            OptionKind::Role => 8,
            OptionKind::Mentionable => 9,
            OptionKind::Number => 10,
            OptionKind::Attachment => 11,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    pub kind: OptionKind,
    pub name: String,
    pub description: String,
    pub required: bool,
}

impl CommandOption {
    pub fn new(kind: OptionKind, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            required: false,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subcommand {
    pub name: String,
    pub description: String,
    pub options: Vec<CommandOption>,
}

impl Subcommand {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            options: Vec::new(),
        }
    }

    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcommandGroup {
    pub name: String,
    pub description: String,
    pub subcommands: Vec<Subcommand>,
}

impl SubcommandGroup {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            subcommands: Vec::new(),
        }
    }

    pub fn subcommand(mut self, subcommand: Subcommand) -> Self {
        self.subcommands.push(subcommand);
        self
    }
}

/// Who may use a handler before a guild admin overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberPermissions {
    Everyone,
    AdminsOnly,
    /// Members holding all of these permission bits.
    Bits(u64),
}

/// Slash command metadata.
#[derive(Debug, Clone)]
pub struct CommandDefinition {
    pub names: LocalizedText,
    pub descriptions: LocalizedText,
    pub options: Vec<CommandOption>,
    pub subcommands: Vec<Subcommand>,
    pub subcommand_groups: Vec<SubcommandGroup>,
    pub default_member_permissions: Option<MemberPermissions>,
    pub nsfw: bool,
    pub guild_only: bool,
    /// Published only to the home guild instead of globally.
    pub home_guild_only: bool,
    /// Names/descriptions for publication come from the `languages.commands.<name>` bundle.
    pub localized: bool,
    pub cooldown: Option<CooldownSpec>,
    /// Shown by help listings.
    pub help: Option<String>,
}

impl CommandDefinition {
    pub fn new(default_name: impl Into<String>, default_description: impl Into<String>) -> Self {
        Self {
            names: LocalizedText::new(default_name),
            descriptions: LocalizedText::new(default_description),
            options: Vec::new(),
            subcommands: Vec::new(),
            subcommand_groups: Vec::new(),
            default_member_permissions: None,
            nsfw: false,
            guild_only: false,
            home_guild_only: false,
            localized: false,
            cooldown: None,
            help: None,
        }
    }

    pub fn default_name(&self) -> &str {
        self.names.default_text()
    }

    pub fn default_description(&self) -> &str {
        self.descriptions.default_text()
    }

    pub fn name(mut self, locale: Locale, name: impl Into<String>) -> Self {
        self.names = self.names.with(locale, name);
        self
    }

    pub fn description(mut self, locale: Locale, description: impl Into<String>) -> Self {
        self.descriptions = self.descriptions.with(locale, description);
        self
    }

    pub fn option(mut self, option: CommandOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn subcommand(mut self, subcommand: Subcommand) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    pub fn subcommand_group(mut self, group: SubcommandGroup) -> Self {
        self.subcommand_groups.push(group);
        self
    }

    pub fn permissions(mut self, permissions: MemberPermissions) -> Self {
        self.default_member_permissions = Some(permissions);
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    pub fn guild_only(mut self, guild_only: bool) -> Self {
        self.guild_only = guild_only;
        self
    }

    pub fn home_guild_only(mut self, home_guild_only: bool) -> Self {
        self.home_guild_only = home_guild_only;
        self
    }

    pub fn localized(mut self, localized: bool) -> Self {
        self.localized = localized;
        self
    }

    pub fn cooldown(mut self, cooldown: CooldownSpec) -> Self {
        self.cooldown = Some(cooldown);
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Which context menu an interaction appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSurface {
    Message,
    User,
}

/// Context-menu interaction metadata. Context interactions have no description or options.
#[derive(Debug, Clone)]
pub struct ContextDefinition {
    pub surface: ContextSurface,
    pub names: LocalizedText,
    pub default_member_permissions: Option<MemberPermissions>,
    pub nsfw: bool,
    pub guild_only: bool,
    pub home_guild_only: bool,
    pub cooldown: Option<CooldownSpec>,
}

impl ContextDefinition {
    pub fn new(surface: ContextSurface, default_name: impl Into<String>) -> Self {
        Self {
            surface,
            names: LocalizedText::new(default_name),
            default_member_permissions: None,
            nsfw: false,
            guild_only: false,
            home_guild_only: false,
            cooldown: None,
        }
    }

    pub fn default_name(&self) -> &str {
        self.names.default_text()
    }

    pub fn name(mut self, locale: Locale, name: impl Into<String>) -> Self {
        self.names = self.names.with(locale, name);
        self
    }

    pub fn permissions(mut self, permissions: MemberPermissions) -> Self {
        self.default_member_permissions = Some(permissions);
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    pub fn guild_only(mut self, guild_only: bool) -> Self {
        self.guild_only = guild_only;
        self
    }

    pub fn home_guild_only(mut self, home_guild_only: bool) -> Self {
        self.home_guild_only = home_guild_only;
        self
    }

    pub fn cooldown(mut self, cooldown: CooldownSpec) -> Self {
        self.cooldown = Some(cooldown);
        self
    }
}

//! Outward-facing command metadata, shaped like the platform's application-command payload.

use dbot_core::{
    CommandDefinition, CommandOption, ContextDefinition, ContextSurface, Locale, LocalizedText,
    MemberPermissions, Subcommand, SubcommandGroup,
};
use localization::Localizer;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Application command type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ChatInput,
    User,
    Message,
}

impl CommandKind {
    pub fn code(self) -> u8 {
        match self {
            CommandKind::ChatInput => 1,
            CommandKind::User => 2,
            CommandKind::Message => 3,
        }
    }
}

impl Serialize for CommandKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

const SUB_COMMAND: u8 = 1;
const SUB_COMMAND_GROUP: u8 = 2;

/// One node of a command's option tree (plain option, subcommand or subcommand group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionMetadata {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionMetadata>,
}

impl From<&CommandOption> for OptionMetadata {
    fn from(option: &CommandOption) -> Self {
        Self {
            kind: option.kind.code(),
            name: option.name.clone(),
            description: option.description.clone(),
            required: option.required,
            options: Vec::new(),
        }
    }
}

impl From<&Subcommand> for OptionMetadata {
    fn from(subcommand: &Subcommand) -> Self {
        Self {
            kind: SUB_COMMAND,
            name: subcommand.name.clone(),
            description: subcommand.description.clone(),
            required: false,
            options: subcommand.options.iter().map(Into::into).collect(),
        }
    }
}

impl From<&SubcommandGroup> for OptionMetadata {
    fn from(group: &SubcommandGroup) -> Self {
        Self {
            kind: SUB_COMMAND_GROUP,
            name: group.name.clone(),
            description: group.description.clone(),
            required: false,
            options: group.subcommands.iter().map(Into::into).collect(),
        }
    }
}

/// Metadata record handed to the publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandMetadata {
    #[serde(rename = "type")]
    pub kind: CommandKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_localizations: Option<BTreeMap<Locale, String>>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_localizations: Option<BTreeMap<Locale, String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionMetadata>,
    /// Permission bit set as a decimal string; `"0"` restricts to admins, absent means everyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_member_permissions: Option<String>,
    pub dm_permission: bool,
    pub nsfw: bool,
}

fn permissions(permissions: Option<MemberPermissions>) -> Option<String> {
    match permissions? {
        MemberPermissions::Everyone => None,
        MemberPermissions::AdminsOnly => Some("0".to_string()),
        MemberPermissions::Bits(bits) => Some(bits.to_string()),
    }
}

fn own_localizations(text: &LocalizedText) -> Option<BTreeMap<Locale, String>> {
    text.is_multilingual().then(|| text.as_map().clone())
}

impl CommandMetadata {
    /// Builds a slash command record. Bundle-localized commands take their name and description maps
    /// from the localizer; otherwise a multilingual definition publishes its own translations.
    pub fn from_command(definition: &CommandDefinition, localizer: &Localizer) -> Self {
        let name = definition.default_name().to_string();
        let (name_localizations, description_localizations) = if definition.localized {
            (
                Some(localizer.command_names(&name)),
                Some(localizer.command_descriptions(&name)),
            )
        } else {
            (
                own_localizations(&definition.names),
                own_localizations(&definition.descriptions),
            )
        };

        let options = definition
            .options
            .iter()
            .map(OptionMetadata::from)
            .chain(definition.subcommands.iter().map(OptionMetadata::from))
            .chain(definition.subcommand_groups.iter().map(OptionMetadata::from))
            .collect();

        Self {
            kind: CommandKind::ChatInput,
            name,
            name_localizations,
            description: definition.default_description().to_string(),
            description_localizations,
            options,
            default_member_permissions: permissions(definition.default_member_permissions),
            dm_permission: !definition.guild_only,
            nsfw: definition.nsfw,
        }
    }

    /// Builds a context-menu record. Context interactions carry no description or options.
    pub fn from_context(definition: &ContextDefinition) -> Self {
        let kind = match definition.surface {
            ContextSurface::Message => CommandKind::Message,
            ContextSurface::User => CommandKind::User,
        };
        Self {
            kind,
            name: definition.default_name().to_string(),
            name_localizations: own_localizations(&definition.names),
            description: String::new(),
            description_localizations: None,
            options: Vec::new(),
            default_member_permissions: permissions(definition.default_member_permissions),
            dm_permission: !definition.guild_only,
            nsfw: definition.nsfw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbot_core::OptionKind;
    use localization::InMemorySource;

    #[test]
    fn test_option_tree_flattens_options_subcommands_and_groups() {
        let definition = CommandDefinition::new("config", "Configure the bot")
            .option(CommandOption::new(OptionKind::Boolean, "dry-run", "Only preview"))
            .subcommand(
                Subcommand::new("show", "Show settings")
                    .option(CommandOption::new(OptionKind::String, "key", "Setting").required(true)),
            )
            .subcommand_group(
                SubcommandGroup::new("channel", "Channel settings")
                    .subcommand(Subcommand::new("set", "Set the channel")),
            );
        let metadata = CommandMetadata::from_command(&definition, &Localizer::new(InMemorySource::new()));

        let kinds: Vec<u8> = metadata.options.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![5, SUB_COMMAND, SUB_COMMAND_GROUP]);
        assert!(metadata.options[1].options[0].required);
        assert_eq!(metadata.options[2].options[0].name, "set");
    }

    #[test]
    fn test_permissions_encoding() {
        assert_eq!(permissions(None), None);
        assert_eq!(permissions(Some(MemberPermissions::Everyone)), None);
        assert_eq!(permissions(Some(MemberPermissions::AdminsOnly)).as_deref(), Some("0"));
        assert_eq!(permissions(Some(MemberPermissions::Bits(8192))).as_deref(), Some("8192"));
    }
}

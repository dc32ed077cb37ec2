//! Integration tests for [`registry::Registry`].
//!
//! Covers: discovery with failing and panicking factories, duplicate names per set, strict cooldown
//! validation, publication partitioning and ordering, idempotent publication, localized metadata, and
//! pushing a publication to a publisher.

use async_trait::async_trait;
use dbot_core::{
    CommandDefinition, ContextDefinition, ContextInteraction, ContextSurface, CooldownSpec, Handler,
    InteractionContext, InteractionSurface, Locale, MemberPermissions, Result, Scope, SlashCommand,
    TimeUnit,
};
use localization::{command_bundle, InMemorySource, Localizer};
use registry::{
    CommandKind, CommandMetadata, HandlerFactory, MetadataPublisher, Registry, RegistrationError,
    RegistryOptions,
};
use std::sync::Mutex;

struct TestCommand(CommandDefinition);

#[async_trait]
impl SlashCommand for TestCommand {
    fn definition(&self) -> &CommandDefinition {
        &self.0
    }

    async fn execute(&self, _ctx: &InteractionContext) -> Result<()> {
        Ok(())
    }
}

struct TestInteraction(ContextDefinition);

#[async_trait]
impl ContextInteraction for TestInteraction {
    fn definition(&self) -> &ContextDefinition {
        &self.0
    }
}

fn command(definition: CommandDefinition) -> Handler {
    Handler::command(TestCommand(definition))
}

fn interaction(definition: ContextDefinition) -> Handler {
    Handler::context(TestInteraction(definition))
}

fn ping() -> anyhow::Result<Handler> {
    Ok(command(CommandDefinition::new("ping", "Shows the ping of the bot")))
}

fn admin() -> anyhow::Result<Handler> {
    Ok(command(
        CommandDefinition::new("admin", "Home guild tools")
            .home_guild_only(true)
            .permissions(MemberPermissions::AdminsOnly),
    ))
}

fn delete() -> anyhow::Result<Handler> {
    Ok(interaction(ContextDefinition::new(ContextSurface::Message, "delete")))
}

fn report() -> anyhow::Result<Handler> {
    Ok(interaction(
        ContextDefinition::new(ContextSurface::User, "report").home_guild_only(true),
    ))
}

fn shadow_ping() -> anyhow::Result<Handler> {
    Ok(command(CommandDefinition::new("PING", "Another ping")))
}

fn ping_context() -> anyhow::Result<Handler> {
    Ok(interaction(ContextDefinition::new(ContextSurface::User, "ping")))
}

fn failing() -> anyhow::Result<Handler> {
    anyhow::bail!("missing api key")
}

fn panicking() -> anyhow::Result<Handler> {
    panic!("constructor exploded")
}

fn bad_cooldown() -> anyhow::Result<Handler> {
    Ok(command(
        CommandDefinition::new("daily", "Daily reward")
            .cooldown(CooldownSpec::new(1, TimeUnit::Unknown, Scope::User)),
    ))
}

fn factories() -> Vec<HandlerFactory> {
    vec![
        HandlerFactory::new("ping", ping),
        HandlerFactory::new("delete", delete),
        HandlerFactory::new("admin", admin),
        HandlerFactory::new("report", report),
    ]
}

/// **Test: Every discovered handler lands in exactly one partition.**
///
/// **Setup:** Two slash commands and two context interactions, one of each home-guild-only.
/// **Action:** discover + publish.
/// **Expected:** global = [ping, delete], home_guild = [admin, report]; slash before context.
#[test]
fn test_publication_partitions_every_handler_once() {
    let registry = Registry::discover(factories(), RegistryOptions::default());
    assert!(registry.errors().is_empty());
    assert_eq!(registry.len(), 4);

    let publication = registry.publish(&Localizer::new(InMemorySource::new()));
    let global: Vec<&str> = publication.global.iter().map(|r| r.name.as_str()).collect();
    let home: Vec<&str> = publication.home_guild.iter().map(|r| r.name.as_str()).collect();

    assert_eq!(global, vec!["ping", "delete"]);
    assert_eq!(home, vec!["admin", "report"]);
    assert_eq!(publication.len(), registry.len());
}

/// **Test: Publishing twice yields the same records, not an accumulation.**
#[test]
fn test_publish_is_idempotent() {
    let registry = Registry::discover(factories(), RegistryOptions::default());
    let localizer = Localizer::new(InMemorySource::new());

    let first = registry.publish(&localizer);
    let second = registry.publish(&localizer);
    assert_eq!(first, second);
    assert_eq!(second.len(), 4);
}

/// **Test: A failing or panicking factory is skipped and discovery continues.**
///
/// **Setup:** [failing, ping, panicking, delete].
/// **Action:** discover.
/// **Expected:** ping and delete registered; two errors with the factory names.
#[test]
fn test_failed_constructions_are_recorded_and_skipped() {
    let registry = Registry::discover(
        vec![
            HandlerFactory::new("failing", failing),
            HandlerFactory::new("ping", ping),
            HandlerFactory::new("panicking", panicking),
            HandlerFactory::new("delete", delete),
        ],
        RegistryOptions::default(),
    );

    assert!(registry.find_command("ping").is_some());
    assert!(registry.find_interaction("delete").is_some());
    assert_eq!(registry.errors().len(), 2);

    match &registry.errors()[0] {
        RegistrationError::Construction { type_name, reason } => {
            assert_eq!(*type_name, "failing");
            assert!(reason.contains("missing api key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    match &registry.errors()[1] {
        RegistrationError::Panicked { type_name, reason } => {
            assert_eq!(*type_name, "panicking");
            assert_eq!(reason, "constructor exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

/// **Test: Names are unique per set, case-insensitively; the first registration wins.**
///
/// **Setup:** ping, PING (slash), ping (user context).
/// **Action:** discover.
/// **Expected:** One DuplicateName error; the slash "ping" keeps its description; the context "ping" is accepted.
#[test]
fn test_duplicate_names_are_rejected_per_set() {
    let registry = Registry::discover(
        vec![
            HandlerFactory::new("ping", ping),
            HandlerFactory::new("shadow_ping", shadow_ping),
            HandlerFactory::new("ping_context", ping_context),
        ],
        RegistryOptions::default(),
    );

    assert_eq!(registry.commands().len(), 1);
    assert_eq!(registry.interactions().len(), 1);
    assert!(matches!(
        registry.errors(),
        [RegistrationError::DuplicateName { name, .. }] if name == "PING"
    ));
    let kept = registry.find_command("Ping").unwrap();
    assert_eq!(kept.definition().default_description(), "Shows the ping of the bot");
}

/// **Test: Misconfigured cooldowns register by default and are rejected in strict mode.**
#[test]
fn test_strict_cooldowns() {
    let lenient = Registry::discover(
        vec![HandlerFactory::new("daily", bad_cooldown)],
        RegistryOptions::default(),
    );
    assert!(lenient.find_command("daily").is_some());

    let strict = Registry::discover(
        vec![HandlerFactory::new("daily", bad_cooldown)],
        RegistryOptions {
            strict_cooldowns: true,
        },
    );
    assert!(strict.is_empty());
    assert!(matches!(
        strict.errors(),
        [RegistrationError::InvalidCooldown { name, .. }] if name == "daily"
    ));
}

/// **Test: resolve routes by surface to the matching set.**
#[test]
fn test_resolve_by_surface() {
    let registry = Registry::discover(
        vec![
            HandlerFactory::new("ping", ping),
            HandlerFactory::new("ping_context", ping_context),
        ],
        RegistryOptions::default(),
    );

    let slash = registry.resolve("PING", InteractionSurface::Slash).unwrap();
    assert!(!slash.is_context());
    let context = registry.resolve("ping", InteractionSurface::MessageContext).unwrap();
    assert!(context.is_context());
    assert!(registry.resolve("missing", InteractionSurface::Slash).is_none());
}

/// **Test: Metadata fields follow the definitions.**
///
/// **Expected:** admin is admins-only ("0") and allowed in DMs; context records have an empty
/// description and the right kind; ping has no permissions field and no localizations.
#[test]
fn test_metadata_fields() {
    let registry = Registry::discover(factories(), RegistryOptions::default());
    let publication = registry.publish(&Localizer::new(InMemorySource::new()));

    let ping = &publication.global[0];
    assert_eq!(ping.kind, CommandKind::ChatInput);
    assert_eq!(ping.default_member_permissions, None);
    assert!(ping.name_localizations.is_none());
    assert!(ping.dm_permission);

    let admin = &publication.home_guild[0];
    assert_eq!(admin.default_member_permissions.as_deref(), Some("0"));

    let delete = &publication.global[1];
    assert_eq!(delete.kind, CommandKind::Message);
    assert_eq!(delete.description, "");
    assert_eq!(publication.home_guild[1].kind, CommandKind::User);
}

/// **Test: Bundle-localized commands publish a name and description for every locale.**
///
/// **Setup:** "ping" marked localized; bundle in en-US and de.
/// **Action:** publish.
/// **Expected:** Both maps cover every locale; de carries the German strings.
#[test]
fn test_localized_command_metadata() {
    fn localized_ping() -> anyhow::Result<Handler> {
        Ok(command(
            CommandDefinition::new("ping", "Shows the ping of the bot").localized(true),
        ))
    }
    let source = InMemorySource::new()
        .with_bundle(
            command_bundle("ping"),
            Locale::EnglishUs,
            [("command.name", "ping"), ("command.description", "Shows the ping of the bot")],
        )
        .with_bundle(
            command_bundle("ping"),
            Locale::German,
            [("command.name", "ping"), ("command.description", "Zeigt den Ping des Bots")],
        );
    let registry = Registry::discover(
        vec![HandlerFactory::new("ping", localized_ping)],
        RegistryOptions::default(),
    );

    let record = &registry.publish(&Localizer::new(source)).global[0];
    let names = record.name_localizations.as_ref().unwrap();
    let descriptions = record.description_localizations.as_ref().unwrap();
    assert_eq!(names.len(), Locale::ALL.len());
    assert_eq!(descriptions[&Locale::German], "Zeigt den Ping des Bots");
    assert_eq!(descriptions[&Locale::Spanish], "Shows the ping of the bot");
}

/// **Test: Serialized records use the platform's field names and omit absent fields.**
#[test]
fn test_metadata_json_shape() {
    let registry = Registry::discover(factories(), RegistryOptions::default());
    let publication = registry.publish(&Localizer::new(InMemorySource::new()));

    let json = serde_json::to_value(&publication.home_guild[0]).unwrap();
    assert_eq!(json["type"], 1);
    assert_eq!(json["name"], "admin");
    assert_eq!(json["default_member_permissions"], "0");
    assert_eq!(json["dm_permission"], true);
    assert!(json.get("name_localizations").is_none());
    assert!(json.get("options").is_none());

    let json = serde_json::to_value(&publication.global[1]).unwrap();
    assert_eq!(json["type"], 3);
}

#[derive(Default)]
struct RecordingPublisher {
    calls: Mutex<Vec<(Option<String>, Vec<String>)>>,
}

#[async_trait]
impl MetadataPublisher for RecordingPublisher {
    async fn publish_global(&self, records: &[CommandMetadata]) -> Result<()> {
        let names = records.iter().map(|r| r.name.clone()).collect();
        self.calls.lock().unwrap().push((None, names));
        Ok(())
    }

    async fn publish_guild(&self, guild_id: &str, records: &[CommandMetadata]) -> Result<()> {
        let names = records.iter().map(|r| r.name.clone()).collect();
        self.calls
            .lock()
            .unwrap()
            .push((Some(guild_id.to_string()), names));
        Ok(())
    }
}

/// **Test: push_to sends the home-guild partition to the home guild and the rest globally.**
///
/// **Setup:** Standard factories; recording publisher.
/// **Action:** push_to with home guild "G1", then push_to without a home guild.
/// **Expected:** First push: guild call then global call. Second push: only the global call.
#[tokio::test]
async fn test_push_to_publisher() {
    let registry = Registry::discover(factories(), RegistryOptions::default());
    let publication = registry.publish(&Localizer::new(InMemorySource::new()));
    let publisher = RecordingPublisher::default();

    publication.push_to(&publisher, Some("G1")).await.unwrap();
    publication.push_to(&publisher, None).await.unwrap();

    let calls = publisher.calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        (Some("G1".to_string()), vec!["admin".to_string(), "report".to_string()])
    );
    assert_eq!(calls[1], (None, vec!["ping".to_string(), "delete".to_string()]));
    assert_eq!(calls[2].0, None);
}

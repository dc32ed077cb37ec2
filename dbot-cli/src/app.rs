//! Wiring: config → registry, localizer, cooldown engine and dispatcher.

use anyhow::{Context, Result};
use cooldown::CooldownEngine;
use dbot_core::Bot;
use dispatcher::Dispatcher;
use localization::{DirectorySource, Localizer};
use registry::{Registry, RegistryOptions};
use std::sync::Arc;
use tracing::info;

use crate::cli::DispatchArgs;
use crate::config::BotConfig;
use crate::console::{ConsoleBot, StdoutPublisher};

/// Discovers the built-in handlers. Registration errors are logged and reported, never fatal.
pub fn build_registry(config: &BotConfig) -> Registry {
    Registry::discover(
        handlers::builtin(),
        RegistryOptions {
            strict_cooldowns: config.strict_cooldowns(),
        },
    )
}

pub fn build_localizer(config: &BotConfig) -> Localizer {
    Localizer::new(DirectorySource::new(config.locales_dir()))
}

pub fn build_dispatcher(config: &BotConfig, bot: Arc<dyn Bot>) -> Dispatcher {
    Dispatcher::new(
        Arc::new(build_registry(config)),
        Arc::new(CooldownEngine::new()),
        Arc::new(build_localizer(config)),
        bot,
    )
}

/// `dbot publish`: prints both partitions through [`StdoutPublisher`].
pub async fn run_publish(config: &BotConfig) -> Result<()> {
    let registry = build_registry(config);
    let publication = registry.publish(&build_localizer(config));
    info!(
        global = publication.global.len(),
        home_guild = publication.home_guild.len(),
        "Publishing command metadata"
    );
    publication
        .push_to(&StdoutPublisher, config.home_guild_id())
        .await
        .context("Publish command metadata")?;
    Ok(())
}

/// `dbot dispatch`: dispatches the event `args.repeat` times and waits for each spawned handler.
pub async fn run_dispatch(config: &BotConfig, args: &DispatchArgs) -> Result<()> {
    let dispatcher = build_dispatcher(config, Arc::new(ConsoleBot::new()));
    for seq in 1..=args.repeat.max(1) {
        let event = args.event(seq);
        match dispatcher.dispatch(event).await {
            Ok(Some(handle)) => {
                if let Err(e) = handle.await.context("Handler task")? {
                    println!("[cli-{}] handler failed: {}", seq, e);
                }
            }
            Ok(None) => {}
            Err(e) => println!("[cli-{}] {}", seq, e),
        }
    }
    Ok(())
}

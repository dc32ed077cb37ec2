//! Stdout-backed [`Bot`] and [`MetadataPublisher`] for running the core without a platform connection.

use async_trait::async_trait;
use dbot_core::{Bot, DbotError, InteractionEvent, Reply, Result};
use registry::{CommandMetadata, MetadataPublisher};
use std::time::{Duration, Instant};

/// Prints every reply action. Gateway ping is the time since the bot was created, capped at 1s.
pub struct ConsoleBot {
    started: Instant,
}

impl ConsoleBot {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for ConsoleBot {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Bot for ConsoleBot {
    async fn reply(&self, event: &InteractionEvent, reply: Reply) -> Result<()> {
        let visibility = if reply.ephemeral { " (ephemeral)" } else { "" };
        println!("[{}] reply{}: {}", event.id, visibility, reply.content);
        Ok(())
    }

    async fn edit_reply(&self, event: &InteractionEvent, content: &str) -> Result<()> {
        println!("[{}] edit: {}", event.id, content);
        Ok(())
    }

    async fn delete_reply(&self, event: &InteractionEvent) -> Result<()> {
        println!("[{}] reply deleted", event.id);
        Ok(())
    }

    async fn delete_message(&self, channel_id: &str, message_id: &str) -> Result<()> {
        println!("message {} deleted in channel {}", message_id, channel_id);
        Ok(())
    }

    fn gateway_ping(&self) -> Duration {
        self.started.elapsed().min(Duration::from_secs(1))
    }
}

/// Prints each partition as pretty JSON.
pub struct StdoutPublisher;

fn print_records(label: &str, records: &[CommandMetadata]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| DbotError::Unknown(format!("Failed to serialize {}: {}", label, e)))?;
    println!("# {} ({} commands)\n{}", label, records.len(), json);
    Ok(())
}

#[async_trait]
impl MetadataPublisher for StdoutPublisher {
    async fn publish_global(&self, records: &[CommandMetadata]) -> Result<()> {
        print_records("global", records)
    }

    async fn publish_guild(&self, guild_id: &str, records: &[CommandMetadata]) -> Result<()> {
        print_records(&format!("guild {}", guild_id), records)
    }
}

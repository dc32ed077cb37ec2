use crate::metadata::CommandMetadata;
use async_trait::async_trait;
use dbot_core::Result;
use tracing::{info, warn};

/// Receives partitioned command metadata, e.g. the platform's application-command endpoint.
#[async_trait]
pub trait MetadataPublisher: Send + Sync {
    async fn publish_global(&self, records: &[CommandMetadata]) -> Result<()>;

    async fn publish_guild(&self, guild_id: &str, records: &[CommandMetadata]) -> Result<()>;
}

/// Metadata split by where it is published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Publication {
    pub global: Vec<CommandMetadata>,
    pub home_guild: Vec<CommandMetadata>,
}

impl Publication {
    pub fn len(&self) -> usize {
        self.global.len() + self.home_guild.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pushes the home-guild partition to `home_guild_id` and the global partition globally.
    /// Without a home guild the home-guild partition is skipped.
    pub async fn push_to(
        &self,
        publisher: &dyn MetadataPublisher,
        home_guild_id: Option<&str>,
    ) -> Result<()> {
        match home_guild_id {
            Some(guild_id) => {
                for record in &self.home_guild {
                    info!(guild_id = %guild_id, name = %record.name, "Publishing home guild command");
                }
                publisher.publish_guild(guild_id, &self.home_guild).await?;
            }
            None if !self.home_guild.is_empty() => {
                warn!(
                    count = self.home_guild.len(),
                    "No home guild configured, skipping home guild commands"
                );
            }
            None => {}
        }

        for record in &self.global {
            info!(name = %record.name, "Publishing global command");
        }
        publisher.publish_global(&self.global).await
    }
}

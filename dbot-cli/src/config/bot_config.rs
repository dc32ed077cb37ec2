//! BotConfig: home guild, bundle directory, log file and registration policy. Use load() for env-based loading.

use dbot_core::{DbotError, Result};
use std::env;

/// Bot config. Call validate() after load() to fail fast before building the registry.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// HOME_GUILD_ID: guild that receives home-guild-only commands
    pub home_guild_id: Option<String>,
    /// LOCALES_DIR: root of the localization bundles
    pub locales_dir: String,
    /// LOG_FILE; set it empty to log to stdout only
    pub log_file: Option<String>,
    /// STRICT_COOLDOWNS: reject misconfigured cooldowns at registration
    pub strict_cooldowns: bool,
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

impl BotConfig {
    /// Load from environment variables. `home_guild_id` overrides HOME_GUILD_ID if provided.
    pub fn load(home_guild_id: Option<String>) -> Result<Self> {
        let home_guild_id = home_guild_id
            .or_else(|| env::var("HOME_GUILD_ID").ok())
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());
        let locales_dir = env::var("LOCALES_DIR").unwrap_or_else(|_| "resources".to_string());
        let log_file = match env::var("LOG_FILE") {
            Ok(path) if path.trim().is_empty() => None,
            Ok(path) => Some(path),
            Err(_) => Some("logs/dbot.log".to_string()),
        };

        Ok(Self {
            home_guild_id,
            locales_dir,
            log_file,
            strict_cooldowns: env_flag("STRICT_COOLDOWNS"),
        })
    }

    /// Validate config (home guild id must be a numeric snowflake if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref id) = self.home_guild_id {
            if id.parse::<u64>().is_err() {
                return Err(DbotError::Config(format!(
                    "HOME_GUILD_ID is set but not a numeric guild id: {}",
                    id
                )));
            }
        }
        Ok(())
    }

    pub fn home_guild_id(&self) -> Option<&str> {
        self.home_guild_id.as_deref()
    }
    pub fn locales_dir(&self) -> &str {
        &self.locales_dir
    }
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }
    pub fn strict_cooldowns(&self) -> bool {
        self.strict_cooldowns
    }
}

//! Bot configuration loaded from the environment (after `.env` via dotenvy).

mod bot_config;


pub use bot_config::BotConfig;

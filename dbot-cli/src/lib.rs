//! # dbot-cli
//!
//! CLI foundation: argument parsing, config loading, and wiring of registry, localizer, cooldown
//! engine and dispatcher around a console bot.

pub mod app;
pub mod cli;
pub mod config;
pub mod console;

pub use app::{build_dispatcher, build_localizer, build_registry, run_dispatch, run_publish};
pub use cli::{Cli, Commands, DispatchArgs, SurfaceArg};
pub use config::BotConfig;
pub use console::{ConsoleBot, StdoutPublisher};

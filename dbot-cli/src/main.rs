//! dbot CLI: publish command metadata or dispatch test events. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use dbot_cli::{run_dispatch, run_publish, BotConfig, Cli, Commands};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let home_guild = match &cli.command {
        Commands::Publish { home_guild } => home_guild.clone(),
        Commands::Dispatch(_) => None,
    };
    let config = BotConfig::load(home_guild)?;
    config.validate()?;
    dbot_core::init_tracing(config.log_file().map(Path::new))?;

    match cli.command {
        Commands::Publish { .. } => run_publish(&config).await,
        Commands::Dispatch(args) => run_dispatch(&config, &args).await,
    }
}

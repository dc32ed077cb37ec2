//! CLI parser and the event built from `dispatch` arguments.

use clap::{Parser, Subcommand, ValueEnum};
use dbot_core::{InteractionEvent, InteractionSurface, Locale};

#[derive(Parser)]
#[command(name = "dbot")]
#[command(about = "Interaction bot CLI: publish command metadata, dispatch test events", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover handlers and print the global and home-guild command metadata as JSON.
    Publish {
        /// Overrides HOME_GUILD_ID.
        #[arg(long)]
        home_guild: Option<String>,
    },
    /// Dispatch one event (optionally several times) through the cooldown gate and print the replies.
    Dispatch(DispatchArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SurfaceArg {
    Slash,
    Message,
    User,
}

impl From<SurfaceArg> for InteractionSurface {
    fn from(surface: SurfaceArg) -> Self {
        match surface {
            SurfaceArg::Slash => InteractionSurface::Slash,
            SurfaceArg::Message => InteractionSurface::MessageContext,
            SurfaceArg::User => InteractionSurface::UserContext,
        }
    }
}

#[derive(clap::Args, Debug, Clone)]
pub struct DispatchArgs {
    /// Invocation name, e.g. "ping" or "delete Message".
    pub name: String,
    #[arg(long, default_value = "1")]
    pub user: String,
    #[arg(long, default_value = "1")]
    pub channel: String,
    #[arg(long)]
    pub guild: Option<String>,
    /// Invoker's locale tag, e.g. en-US or de.
    #[arg(long, default_value = "en-US")]
    pub locale: String,
    #[arg(long, value_enum, default_value_t = SurfaceArg::Slash)]
    pub surface: SurfaceArg,
    /// Target message or user id for context interactions.
    #[arg(long)]
    pub target: Option<String>,
    /// Number of times to dispatch the same event.
    #[arg(long, default_value = "1")]
    pub repeat: u32,
}

impl DispatchArgs {
    /// The event for invocation number `seq`.
    pub fn event(&self, seq: u32) -> InteractionEvent {
        let surface = InteractionSurface::from(self.surface);
        let event = match (&self.target, surface.is_context()) {
            (Some(target), true) => InteractionEvent::context(
                surface,
                &self.name,
                &self.user,
                &self.channel,
                self.guild.clone(),
                target,
            ),
            _ => {
                let mut event = InteractionEvent::slash(
                    &self.name,
                    &self.user,
                    &self.channel,
                    self.guild.clone(),
                );
                event.surface = surface;
                event
            }
        };
        event
            .with_id(format!("cli-{}", seq))
            .with_locale(Locale::from_tag(&self.locale))
    }
}

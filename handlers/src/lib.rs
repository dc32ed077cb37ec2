//! # Handlers
//!
//! Built-in handlers: the `ping` slash command and the `delete Message` / `mention User` context
//! interactions. [`builtin`] lists a factory for each, for [`registry::Registry::discover`].

mod delete_message;
mod mention_user;
mod ping;

#[cfg(test)]
mod test;

pub use delete_message::DeleteMessageInteraction;
pub use mention_user::MentionUserInteraction;
pub use ping::PingCommand;

use dbot_core::Handler;
use registry::HandlerFactory;

/// Every built-in handler, in registration order.
pub fn builtin() -> Vec<HandlerFactory> {
    vec![
        HandlerFactory::new("PingCommand", || Ok(Handler::command(PingCommand::new()))),
        HandlerFactory::new("DeleteMessageInteraction", || {
            Ok(Handler::context(DeleteMessageInteraction::new()))
        }),
        HandlerFactory::new("MentionUserInteraction", || {
            Ok(Handler::context(MentionUserInteraction::new()))
        }),
    ]
}

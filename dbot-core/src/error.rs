use thiserror::Error;

use crate::types::InteractionSurface;

#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    /// The handler was invoked on an interaction surface it does not implement.
    #[error("Handler '{handler}' does not support {surface} interactions")]
    UnsupportedSurface {
        handler: String,
        surface: InteractionSurface,
    },

    #[error("Interaction has no target")]
    MissingTarget,

    /// Handler-side failure while executing.
    #[error("State error: {0}")]
    State(String),
}

pub type Result<T> = std::result::Result<T, DbotError>;

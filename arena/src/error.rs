//! Error taxonomy for fetching and battling.

use thiserror::Error;

/// Errors surfaced by the arena library
#[derive(Debug, Error)]
pub enum ArenaError {
    /// Connection failure or timeout while talking to the API
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },

    /// Non-success status or a body that could not be decoded
    #[error("protocol error for {url}: {message}")]
    Protocol { url: String, message: String },

    /// Input that violates a precondition (bad chunk size, negative count, dead combatant)
    #[error("validation error: {0}")]
    Validation(String),
}

impl ArenaError {
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn protocol(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Protocol {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ArenaError>;

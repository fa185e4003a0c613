//! Centralized error types for Sentiment Aura.

use thiserror::Error;

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum AuraError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("{0}")]
    Completion(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for analysis operations.
pub type AuraResult<T> = Result<T, AuraError>;

impl AuraError {
    /// Create a completion error, keeping the full cause chain in the message.
    pub fn completion(err: anyhow::Error) -> Self {
        Self::Completion(format!("{err:#}"))
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the caller sent something unusable, as opposed to a server-side failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyText)
    }
}

//! Error types

use thiserror::Error;

/// Errors returned by the widget API.
#[derive(Debug, Error)]
pub enum Error {
    /// A listener kind other than `select` or `deselect` was requested.
    #[error("Unknown listener type: {0}")]
    UnknownListenerKind(String),

    /// A JSON configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failure reported by a listener, either directly or through its deferred
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Listener failed: {message}")]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

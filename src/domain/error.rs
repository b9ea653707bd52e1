use std::io;

use thiserror::Error;

/// Library-wide error type for foliogen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration issue.
    #[error("{0}")]
    InvalidConfig(String),

    /// Backend API key missing from the environment.
    #[error("Missing API key: set the {0} environment variable")]
    MissingApiKey(String),

    /// Upstream generative-service failure (network, auth, rate limit,
    /// malformed response). The message is surfaced verbatim as the
    /// `details` field of the failure envelope.
    #[error("{message}")]
    Backend { message: String, status: Option<u16> },

    /// Section identifier is invalid.
    #[error("Invalid section identifier '{0}': must be alphanumeric")]
    InvalidSectionId(String),

    /// Prompt template failed to render.
    #[error("Failed to render template '{name}': {reason}")]
    Template { name: String, reason: String },

    /// Inbound request could not be interpreted.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub(crate) fn backend<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::Backend { message: message.into(), status }
    }
}

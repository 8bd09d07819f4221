use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("Prompt must not be empty")]
    EmptyPrompt,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Throttled: {0}")]
    Throttled(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Coarse classification of a failure, stored alongside failed result slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Config,
    Auth,
    Throttled,
    Network,
    Provider,
    MalformedResponse,
    Internal,
}

impl ArenaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyPrompt | Self::Validation(_) => ErrorKind::Validation,
            Self::Config(_) => ErrorKind::Config,
            Self::Auth(_) => ErrorKind::Auth,
            Self::Throttled(_) => ErrorKind::Throttled,
            Self::Network(_) => ErrorKind::Network,
            Self::Provider(_) => ErrorKind::Provider,
            Self::MalformedResponse(_) | Self::Serde(_) => ErrorKind::MalformedResponse,
            Self::Internal(_) | Self::Io(_) => ErrorKind::Internal,
        }
    }

    /// True for errors raised before any agent was contacted.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::EmptyPrompt | Self::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ArenaError>;

//! Unified error type exposed by **`ideabox-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`GenerationGateway`](crate::gateway::GenerationGateway).
//! Every variant maps onto exactly one [`ErrorCode`], which is what the route
//! layer puts on the wire.

use std::fmt::{self, Display};

use serde::Serialize;
use thiserror::Error;

use crate::model::ProviderId;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Coarse error kinds surfaced to callers as `{code, message}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidRequest,
    InvalidMessage,
    ModelNotFound,
    ApiKeyMissing,
    ApiError,
    NoProviderConfigured,
    InternalError,
    GenerationError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::InvalidMessage => "INVALID_MESSAGE",
            ErrorCode::ModelNotFound => "MODEL_NOT_FOUND",
            ErrorCode::ApiKeyMissing => "API_KEY_MISSING",
            ErrorCode::ApiError => "API_ERROR",
            ErrorCode::NoProviderConfigured => "NO_PROVIDER_CONFIGURED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::GenerationError => "GENERATION_ERROR",
        }
    }

    /// `true` for errors caused by the caller's input rather than the server.
    pub fn is_client_error(self) -> bool {
        matches!(
            self,
            ErrorCode::InvalidRequest | ErrorCode::InvalidMessage | ErrorCode::ModelNotFound
        )
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    /// The request as a whole is malformed (e.g. no messages at all).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// One of the messages has an empty content.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// The caller asked for a model that is not in the available list.
    #[error("model `{model}` is not available")]
    ModelNotFound { model: String },

    /// The resolved provider has no credential configured.
    #[error("{} API key is not configured (set `{}`)", .provider.display_name(), .provider.credential_env())]
    ApiKeyMissing { provider: ProviderId },

    /// The upstream provider answered with a non-success status.
    ///
    /// `message` is the complete, human-readable text and always embeds the
    /// HTTP status.
    #[error("{message}")]
    Api {
        provider: ProviderId,
        status: u16,
        message: String,
    },

    /// No provider has any credential, so nothing can be dispatched.
    #[error("at least one AI provider API key must be configured")]
    NoProviderConfigured,

    /// Network-level failure reaching the provider, or an undecodable body.
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Catch-all for anything unclassified.
    #[error("{0}")]
    Internal(String),
}

impl GenerationError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GenerationError::InvalidRequest(_) => ErrorCode::InvalidRequest,
            GenerationError::InvalidMessage(_) => ErrorCode::InvalidMessage,
            GenerationError::ModelNotFound { .. } => ErrorCode::ModelNotFound,
            GenerationError::ApiKeyMissing { .. } => ErrorCode::ApiKeyMissing,
            GenerationError::Api { .. } => ErrorCode::ApiError,
            GenerationError::NoProviderConfigured => ErrorCode::NoProviderConfigured,
            GenerationError::Transport(_) | GenerationError::Internal(_) => {
                ErrorCode::InternalError
            }
        }
    }

    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        GenerationError::Transport(Box::new(err))
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(value: serde_json::Error) -> Self {
        GenerationError::Transport(Box::new(value))
    }
}

use super::{EmbeddingError, RetrievalError};

/// Result alias used throughout the workspace.
pub type SeekerResult<T> = Result<T, SeekerError>;

/// Top-level error for the Seeker engine.
///
/// `InvalidInput` is raised before any collaborator is called. Every other
/// variant is a collaborator failure (see [`SeekerError::is_collaborator_failure`]).
#[derive(Debug, thiserror::Error)]
pub enum SeekerError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("inference worker failed: {reason}")]
    WorkerPool { reason: String },
}

impl SeekerError {
    /// Shorthand for [`SeekerError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Whether the error came from a downstream collaborator (model, index,
    /// repository, worker pool) rather than from a malformed request.
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(
            self,
            Self::EmbeddingError(_)
                | Self::RetrievalError(_)
                | Self::SerializationError(_)
                | Self::WorkerPool { .. }
        )
    }
}

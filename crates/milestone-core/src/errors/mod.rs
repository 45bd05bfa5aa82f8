mod collaborator_error;
mod config_error;

pub use collaborator_error::CollaboratorError;
pub use config_error::ConfigError;

/// Top-level error for the milestone scorer.
///
/// Never crosses the public `assess` boundary: the scorer converts any
/// error escaping orchestration into the fallback assessment.
#[derive(Debug, thiserror::Error)]
pub enum MilestoneError {
    #[error("collaborator error: {0}")]
    CollaboratorError(#[from] CollaboratorError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("non-finite score produced during {stage}")]
    NonFiniteScore { stage: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("storage error: {reason}")]
    StorageError { reason: String },
}

pub type MilestoneResult<T> = Result<T, MilestoneError>;

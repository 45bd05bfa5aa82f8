/// Errors raised by optional strategic-learning collaborators.
///
/// Always absorbed per factor; the factor falls back to its text heuristic.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("{collaborator} failed: {reason}")]
    Failed { collaborator: String, reason: String },

    #[error("{collaborator} timed out after {timeout_ms}ms")]
    TimedOut {
        collaborator: String,
        timeout_ms: u64,
    },

    #[error("{collaborator} returned an invalid response: {reason}")]
    InvalidResponse { collaborator: String, reason: String },
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    #[error("factor weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    #[error("weight for {factor} must be finite and non-negative, got {weight}")]
    NegativeWeight { factor: String, weight: f64 },
}

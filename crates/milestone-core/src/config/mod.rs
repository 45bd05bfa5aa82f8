pub mod defaults;
mod observability_config;
mod scorer_config;

pub use observability_config::ObservabilityConfig;
pub use scorer_config::{FactorWeights, ReasoningThresholds, ScorerConfig};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneConfig {
    pub scorer: ScorerConfig,
    pub observability: ObservabilityConfig,
}

impl MilestoneConfig {
    /// Parse a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.scorer.validate()?;
        Ok(config)
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::FactorKind;

/// Weight of each factor in the milestone score. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FactorWeights {
    pub complexity: f64,
    pub risk_score: f64,
    pub domain: f64,
    pub novelty: f64,
    pub uniqueness: f64,
    pub keywords: f64,
    pub file_impact: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            complexity: defaults::DEFAULT_COMPLEXITY_WEIGHT,
            risk_score: defaults::DEFAULT_RISK_SCORE_WEIGHT,
            domain: defaults::DEFAULT_DOMAIN_WEIGHT,
            novelty: defaults::DEFAULT_NOVELTY_WEIGHT,
            uniqueness: defaults::DEFAULT_UNIQUENESS_WEIGHT,
            keywords: defaults::DEFAULT_KEYWORDS_WEIGHT,
            file_impact: defaults::DEFAULT_FILE_IMPACT_WEIGHT,
        }
    }
}

impl FactorWeights {
    pub fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::Complexity => self.complexity,
            FactorKind::RiskScore => self.risk_score,
            FactorKind::Domain => self.domain,
            FactorKind::Novelty => self.novelty,
            FactorKind::Uniqueness => self.uniqueness,
            FactorKind::Keywords => self.keywords,
            FactorKind::FileImpact => self.file_impact,
        }
    }

    pub fn sum(&self) -> f64 {
        FactorKind::ALL.iter().map(|k| self.get(*k)).sum()
    }

    /// Every weight finite and non-negative, total within tolerance of 1.0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for kind in FactorKind::ALL {
            let weight = self.get(kind);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::NegativeWeight {
                    factor: kind.to_string(),
                    weight,
                });
            }
        }
        let sum = self.sum();
        if (sum - 1.0).abs() > defaults::WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights { sum });
        }
        Ok(())
    }
}

/// Factor score at or above which the factor contributes a reasoning clause.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReasoningThresholds {
    pub complexity: f64,
    pub risk_score: f64,
    pub domain: f64,
    pub novelty: f64,
    pub uniqueness: f64,
    pub keywords: f64,
    pub file_impact: f64,
}

impl Default for ReasoningThresholds {
    fn default() -> Self {
        Self {
            complexity: defaults::DEFAULT_COMPLEXITY_REASON_THRESHOLD,
            risk_score: defaults::DEFAULT_RISK_SCORE_REASON_THRESHOLD,
            domain: defaults::DEFAULT_DOMAIN_REASON_THRESHOLD,
            novelty: defaults::DEFAULT_NOVELTY_REASON_THRESHOLD,
            uniqueness: defaults::DEFAULT_UNIQUENESS_REASON_THRESHOLD,
            keywords: defaults::DEFAULT_KEYWORDS_REASON_THRESHOLD,
            file_impact: defaults::DEFAULT_FILE_IMPACT_REASON_THRESHOLD,
        }
    }
}

impl ReasoningThresholds {
    pub fn get(&self, kind: FactorKind) -> f64 {
        match kind {
            FactorKind::Complexity => self.complexity,
            FactorKind::RiskScore => self.risk_score,
            FactorKind::Domain => self.domain,
            FactorKind::Novelty => self.novelty,
            FactorKind::Uniqueness => self.uniqueness,
            FactorKind::Keywords => self.keywords,
            FactorKind::FileImpact => self.file_impact,
        }
    }
}

/// Scorer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorerConfig {
    /// Upper bound on a single collaborator call (milliseconds).
    pub collaborator_timeout_ms: u64,
    /// How many analogous problems to request from knowledge search.
    pub analogous_problem_limit: usize,
    pub weights: FactorWeights,
    pub reasoning_thresholds: ReasoningThresholds,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            collaborator_timeout_ms: defaults::DEFAULT_COLLABORATOR_TIMEOUT_MS,
            analogous_problem_limit: defaults::DEFAULT_ANALOGOUS_PROBLEM_LIMIT,
            weights: FactorWeights::default(),
            reasoning_thresholds: ReasoningThresholds::default(),
        }
    }
}

impl ScorerConfig {
    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_millis(self.collaborator_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.weights.validate()
    }
}

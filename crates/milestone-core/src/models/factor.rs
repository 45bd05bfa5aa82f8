use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_SCORE;

/// The seven independent significance factors, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FactorKind {
    Complexity,
    RiskScore,
    Domain,
    Novelty,
    Uniqueness,
    Keywords,
    FileImpact,
}

impl FactorKind {
    /// All factors in declaration order. Reasoning clauses follow this order.
    pub const ALL: [FactorKind; 7] = [
        FactorKind::Complexity,
        FactorKind::RiskScore,
        FactorKind::Domain,
        FactorKind::Novelty,
        FactorKind::Uniqueness,
        FactorKind::Keywords,
        FactorKind::FileImpact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Complexity => "complexity",
            Self::RiskScore => "riskScore",
            Self::Domain => "domain",
            Self::Novelty => "novelty",
            Self::Uniqueness => "uniqueness",
            Self::Keywords => "keywords",
            Self::FileImpact => "fileImpact",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A factor's reported value: a category label or a raw number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FactorValue {
    Label(String),
    Number(f64),
}

impl FactorValue {
    pub fn label(value: impl Into<String>) -> Self {
        Self::Label(value.into())
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Label(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Label(_) => None,
        }
    }
}

impl fmt::Display for FactorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// One scored factor. Created once per assessment and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factor {
    pub value: FactorValue,
    /// Score in [0, 100].
    pub score: f64,
    /// Confidence in [0, 1].
    pub confidence: f64,
}

impl Factor {
    /// Build a factor, clamping score to [0, 100] and confidence to [0, 1].
    pub fn new(value: FactorValue, score: f64, confidence: f64) -> Self {
        Self {
            value,
            score: clamp_score(score),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn labelled(label: impl Into<String>, score: f64, confidence: f64) -> Self {
        Self::new(FactorValue::label(label), score, confidence)
    }

    pub fn numeric(value: f64, score: f64, confidence: f64) -> Self {
        Self::new(FactorValue::Number(value), score, confidence)
    }
}

/// Clamp a score into [0, 100]. NaN passes through so callers can detect it.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, MAX_SCORE)
}

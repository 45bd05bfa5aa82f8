use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Classification, DegradationEvent, Factor, FactorKind, LevelAssessment, RestorePointStrategy,
};
use crate::constants::{FALLBACK_CONFIDENCE, FALLBACK_MILESTONE_SCORE, FALLBACK_REASONING};

/// The seven factors of one assessment, keyed by their wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentFactors {
    pub complexity: Factor,
    pub risk_score: Factor,
    pub domain: Factor,
    pub novelty: Factor,
    pub uniqueness: Factor,
    pub keywords: Factor,
    pub file_impact: Factor,
}

impl AssessmentFactors {
    pub fn get(&self, kind: FactorKind) -> &Factor {
        match kind {
            FactorKind::Complexity => &self.complexity,
            FactorKind::RiskScore => &self.risk_score,
            FactorKind::Domain => &self.domain,
            FactorKind::Novelty => &self.novelty,
            FactorKind::Uniqueness => &self.uniqueness,
            FactorKind::Keywords => &self.keywords,
            FactorKind::FileImpact => &self.file_impact,
        }
    }

    /// Factors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (FactorKind, &Factor)> + '_ {
        FactorKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Mean confidence across all seven factors, in [0, 1].
    pub fn average_confidence(&self) -> f64 {
        self.iter().map(|(_, f)| f.confidence).sum::<f64>() / FactorKind::ALL.len() as f64
    }

    /// Factor values the heuristics would produce with no usable signal.
    pub fn heuristic_defaults() -> Self {
        Self {
            complexity: Factor::labelled("moderate", 50.0, FALLBACK_CONFIDENCE),
            risk_score: Factor::numeric(50.0, 50.0, FALLBACK_CONFIDENCE),
            domain: Factor::labelled("general", 50.0, FALLBACK_CONFIDENCE),
            novelty: Factor::numeric(50.0, 50.0, FALLBACK_CONFIDENCE),
            uniqueness: Factor::numeric(60.0, 60.0, FALLBACK_CONFIDENCE),
            keywords: Factor::labelled("moderate", 50.0, FALLBACK_CONFIDENCE),
            file_impact: Factor::numeric(1.0, 8.0, FALLBACK_CONFIDENCE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityResult {
    pub score: u8,
    pub clarity_score: u8,
    pub approach_risk: LevelAssessment,
    pub assessment: LevelAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UncertaintyResult {
    pub score: u8,
    /// Mean factor confidence scaled to [0, 100].
    pub avg_confidence: u8,
    pub assessment: LevelAssessment,
}

/// Result of one milestone assessment. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub milestone_score: u8,
    pub classification: Classification,
    pub factors: AssessmentFactors,
    pub reasoning: String,
    pub feasibility: FeasibilityResult,
    pub uncertainty: UncertaintyResult,
    pub restore_point_strategy: RestorePointStrategy,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_fallback: bool,
    #[serde(default)]
    pub degradations: Vec<DegradationEvent>,
}

impl Assessment {
    /// The fixed assessment returned when orchestration fails.
    pub fn fallback() -> Self {
        let classification = Classification::Moderate;
        Self {
            milestone_score: FALLBACK_MILESTONE_SCORE,
            classification,
            factors: AssessmentFactors::heuristic_defaults(),
            reasoning: FALLBACK_REASONING.to_string(),
            feasibility: FeasibilityResult {
                score: 50,
                clarity_score: 50,
                approach_risk: LevelAssessment::Moderate,
                assessment: LevelAssessment::Moderate,
            },
            uncertainty: UncertaintyResult {
                score: 50,
                avg_confidence: 50,
                assessment: LevelAssessment::Moderate,
            },
            restore_point_strategy: RestorePointStrategy::for_classification(classification),
            timestamp: Utc::now(),
            is_fallback: true,
            degradations: Vec::new(),
        }
    }

    /// One-line summary, e.g. `MAJOR (76/100): High risk profile`.
    pub fn summary(&self) -> String {
        format!(
            "{} ({}/100): {}",
            self.classification, self.milestone_score, self.reasoning
        )
    }

    pub fn to_json(&self) -> crate::errors::MilestoneResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

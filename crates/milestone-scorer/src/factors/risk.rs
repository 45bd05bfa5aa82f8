//! Risk score: how likely the mission is to break something.
//!
//! Collaborator: `IMissionPredictor` (risk score).
//! Heuristic: destructive or sensitive vocabulary.

use std::sync::LazyLock;

use milestone_core::errors::{CollaboratorError, MilestoneResult};
use milestone_core::models::{clamp_score, Factor, MissionPrediction};

use super::{prediction_confidence, PREDICTOR};
use crate::text::KeywordMatcher;

pub const RISK_KEYWORDS: [&str; 9] = [
    "migrate",
    "breaking",
    "delete",
    "remove",
    "refactor",
    "replace",
    "authentication",
    "payment",
    "security",
];

pub const POINTS_PER_MATCH: f64 = 20.0;
pub const BASE_SCORE: f64 = 20.0;
pub const DEFAULT_PREDICTED_RISK: f64 = 50.0;
pub const HEURISTIC_CONFIDENCE: f64 = 0.6;

static MATCHER: LazyLock<KeywordMatcher> =
    LazyLock::new(|| KeywordMatcher::whole_word(&RISK_KEYWORDS));

pub fn heuristic(text: &str) -> Factor {
    let matches = MATCHER.count(text) as f64;
    let score = (matches * POINTS_PER_MATCH + BASE_SCORE).min(100.0);
    Factor::numeric(score, score, HEURISTIC_CONFIDENCE)
}

pub fn from_prediction(prediction: &MissionPrediction) -> MilestoneResult<Factor> {
    let risk = prediction.risk_score.unwrap_or(DEFAULT_PREDICTED_RISK);
    if !risk.is_finite() {
        return Err(CollaboratorError::InvalidResponse {
            collaborator: PREDICTOR.to_string(),
            reason: format!("non-finite riskScore {risk}"),
        }
        .into());
    }
    let confidence = prediction_confidence(prediction)?;
    let risk = clamp_score(risk);
    Ok(Factor::numeric(risk, risk, confidence))
}

//! Novelty: how much of the mission is new ground.

use std::sync::LazyLock;

use milestone_core::errors::{CollaboratorError, MilestoneResult};
use milestone_core::models::{clamp_score, Factor, RiskAssessment};

use super::RISK_ASSESSOR;
use crate::text::KeywordMatcher;

pub const NOVELTY_KEYWORDS: [&str; 7] = [
    "new",
    "first time",
    "never",
    "implement",
    "create",
    "build",
    "unfamiliar",
];

pub const POINTS_PER_MATCH: f64 = 25.0;
pub const BASE_SCORE: f64 = 30.0;
pub const DEFAULT_NOVELTY_FACTOR: f64 = 50.0;
pub const ASSESSOR_CONFIDENCE: f64 = 0.7;
pub const HEURISTIC_CONFIDENCE: f64 = 0.6;

static MATCHER: LazyLock<KeywordMatcher> =
    LazyLock::new(|| KeywordMatcher::whole_word(&NOVELTY_KEYWORDS));

pub fn heuristic(text: &str) -> Factor {
    let matches = MATCHER.count(text) as f64;
    let score = (matches * POINTS_PER_MATCH + BASE_SCORE).min(100.0);
    Factor::numeric(score, score, HEURISTIC_CONFIDENCE)
}

pub fn from_risk_assessment(assessment: &RiskAssessment) -> MilestoneResult<Factor> {
    let novelty = assessment.novelty_factor.unwrap_or(DEFAULT_NOVELTY_FACTOR);
    if !novelty.is_finite() {
        return Err(CollaboratorError::InvalidResponse {
            collaborator: RISK_ASSESSOR.to_string(),
            reason: format!("non-finite noveltyFactor {novelty}"),
        }
        .into());
    }
    let novelty = clamp_score(novelty);
    Ok(Factor::numeric(novelty, novelty, ASSESSOR_CONFIDENCE))
}

//! Uniqueness: how few precedents exist for the mission.
//!
//! Collaborator: `IKnowledgeSearch` (analogous problems).
//! Without it the factor is a flat "moderately unique" assumption.

use milestone_core::errors::{CollaboratorError, MilestoneResult};
use milestone_core::models::{clamp_score, AnalogousProblem, Factor};

use super::KNOWLEDGE_SEARCH;

pub const NO_PRECEDENT_SCORE: f64 = 100.0;
pub const SEARCH_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_UNIQUENESS: f64 = 60.0;
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

pub fn heuristic() -> Factor {
    Factor::numeric(DEFAULT_UNIQUENESS, DEFAULT_UNIQUENESS, DEFAULT_CONFIDENCE)
}

/// `100 - similarity` of the top (first returned) analogous problem, or 100
/// with no matches. Result order is the collaborator's ranking.
pub fn from_analogous_problems(problems: &[AnalogousProblem]) -> MilestoneResult<Factor> {
    if let Some(bad) = problems.iter().find(|p| !p.similarity.is_finite()) {
        return Err(CollaboratorError::InvalidResponse {
            collaborator: KNOWLEDGE_SEARCH.to_string(),
            reason: format!("non-finite similarity {}", bad.similarity),
        }
        .into());
    }

    let score = match problems.first() {
        None => NO_PRECEDENT_SCORE,
        Some(top) => clamp_score((100.0 - top.similarity).round()),
    };
    Ok(Factor::numeric(score, score, SEARCH_CONFIDENCE))
}

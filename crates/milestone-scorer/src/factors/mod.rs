//! The seven significance factors.
//!
//! Each module exposes a text `heuristic` and, where a collaborator exists,
//! a mapping from the collaborator's response to a `Factor`. Mappings reject
//! malformed responses so the engine can fall back to the heuristic.

pub mod complexity;
pub mod domain;
pub mod file_impact;
pub mod keywords;
pub mod novelty;
pub mod risk;
pub mod uniqueness;

use milestone_core::errors::{CollaboratorError, MilestoneResult};
use milestone_core::models::MissionPrediction;

/// Collaborator names used in logs and degradation events.
pub const PREDICTOR: &str = "mission_predictor";
pub const STRATEGY_SELECTOR: &str = "strategy_selector";
pub const RISK_ASSESSOR: &str = "risk_assessor";
pub const KNOWLEDGE_SEARCH: &str = "knowledge_search";

/// Confidence used when a prediction carries no confidence interval.
pub const DEFAULT_PREDICTION_CONFIDENCE: f64 = 0.5;

/// Confidence reported with a mission prediction, defaulting to 0.5.
pub(crate) fn prediction_confidence(prediction: &MissionPrediction) -> MilestoneResult<f64> {
    let confidence = prediction
        .confidence_interval
        .as_ref()
        .and_then(|ci| ci.confidence)
        .unwrap_or(DEFAULT_PREDICTION_CONFIDENCE);
    if !(0.0..=1.0).contains(&confidence) {
        return Err(CollaboratorError::InvalidResponse {
            collaborator: PREDICTOR.to_string(),
            reason: format!("confidence {confidence} outside [0, 1]"),
        }
        .into());
    }
    Ok(confidence)
}

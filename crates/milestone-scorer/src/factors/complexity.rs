//! Complexity: how hard the mission looks.
//!
//! Collaborator: `IMissionPredictor` (estimated complexity label).
//! Heuristic: request length and technical vocabulary.

use milestone_core::errors::{CollaboratorError, MilestoneResult};
use milestone_core::models::{Factor, MissionPrediction};

use super::{prediction_confidence, PREDICTOR};
use crate::text::word_count;

/// Complexity label → score.
pub const COMPLEXITY_SCORES: [(&str, f64); 5] = [
    ("trivial", 10.0),
    ("simple", 30.0),
    ("moderate", 50.0),
    ("complex", 75.0),
    ("extreme", 95.0),
];

/// Technical terms counted by the heuristic (substring, case-insensitive).
pub const TECHNICAL_TERMS: [&str; 8] = [
    "api",
    "database",
    "architecture",
    "integration",
    "security",
    "performance",
    "authentication",
    "payment",
];

pub const HEURISTIC_CONFIDENCE: f64 = 0.6;

pub fn score_for_label(label: &str) -> Option<f64> {
    COMPLEXITY_SCORES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, score)| *score)
}

/// Distinct technical terms appearing anywhere in the text.
pub fn technical_term_count(text: &str) -> usize {
    let lower = text.to_lowercase();
    TECHNICAL_TERMS
        .iter()
        .filter(|term| lower.contains(*term))
        .count()
}

pub fn heuristic(text: &str) -> Factor {
    let words = word_count(text);
    let terms = technical_term_count(text);

    let label = if words > 50 || terms > 5 {
        "extreme"
    } else if words > 30 || terms > 3 {
        "complex"
    } else if words > 15 || terms > 1 {
        "moderate"
    } else {
        "simple"
    };

    let score = score_for_label(label).unwrap_or(50.0);
    Factor::labelled(label, score, HEURISTIC_CONFIDENCE)
}

pub fn from_prediction(prediction: &MissionPrediction) -> MilestoneResult<Factor> {
    let label = prediction
        .estimated_complexity
        .as_deref()
        .map(|l| l.trim().to_lowercase())
        .ok_or_else(|| CollaboratorError::InvalidResponse {
            collaborator: PREDICTOR.to_string(),
            reason: "missing estimatedComplexity".to_string(),
        })?;
    let score = score_for_label(&label).ok_or_else(|| CollaboratorError::InvalidResponse {
        collaborator: PREDICTOR.to_string(),
        reason: format!("unknown complexity label '{label}'"),
    })?;
    let confidence = prediction_confidence(prediction)?;
    Ok(Factor::labelled(label, score, confidence))
}

//! Structured log events for scorer operations.
//!
//! Each function emits a `tracing` event with structured fields.

use milestone_core::models::Classification;

/// Log a completed assessment.
pub fn assessment_completed(score: u8, classification: Classification, degraded_factors: usize) {
    tracing::info!(
        event = "assessment_completed",
        milestone_score = score,
        classification = %classification,
        degraded_factors = degraded_factors,
        "milestone assessment completed"
    );
}

/// Log a factor that fell back from its collaborator to the text heuristic.
pub fn factor_degraded(factor: &str, collaborator: &str, failure: &str) {
    tracing::warn!(
        event = "factor_degraded",
        factor = %factor,
        collaborator = %collaborator,
        failure = %failure,
        "collaborator failed, using heuristic"
    );
}

/// Log the whole-assessment fallback.
pub fn fallback_assessment(reason: &str) {
    tracing::error!(
        event = "fallback_assessment",
        reason = %reason,
        "assessment failed, returning fallback"
    );
}

/// Log an assessment handed to the store.
pub fn assessment_recorded(classification: Classification) {
    tracing::debug!(
        event = "assessment_recorded",
        classification = %classification,
        "assessment recorded"
    );
}

/// Log a store failure. The assessment is still returned to the caller.
pub fn assessment_record_failed(error: &str) {
    tracing::warn!(
        event = "assessment_record_failed",
        error = %error,
        "failed to record assessment"
    );
}

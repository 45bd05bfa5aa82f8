use milestone_core::models::{
    clamp_score, AssessmentFactors, FeasibilityResult, LevelAssessment, UncertaintyResult,
};

/// Uncertainty from mean factor confidence and feasibility.
pub fn derive_uncertainty(
    factors: &AssessmentFactors,
    feasibility: &FeasibilityResult,
) -> UncertaintyResult {
    let avg_confidence = factors.average_confidence();
    let raw = 100.0 - (avg_confidence * 50.0 + f64::from(feasibility.score) * 0.5);
    let score = clamp_score(raw.round()) as u8;

    let assessment = if score >= 70 {
        LevelAssessment::High
    } else if score >= 40 {
        LevelAssessment::Moderate
    } else {
        LevelAssessment::Low
    };

    UncertaintyResult {
        score,
        avg_confidence: clamp_score((avg_confidence * 100.0).round()) as u8,
        assessment,
    }
}

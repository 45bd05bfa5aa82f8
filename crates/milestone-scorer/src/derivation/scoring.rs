use milestone_core::config::FactorWeights;
use milestone_core::errors::{MilestoneError, MilestoneResult};
use milestone_core::models::{clamp_score, AssessmentFactors};

/// Unrounded weighted sum of the factor scores.
pub fn weighted_score(factors: &AssessmentFactors, weights: &FactorWeights) -> MilestoneResult<f64> {
    let score: f64 = factors
        .iter()
        .map(|(kind, factor)| factor.score * weights.get(kind))
        .sum();
    if !score.is_finite() {
        return Err(MilestoneError::NonFiniteScore {
            stage: "weighted_sum".to_string(),
        });
    }
    Ok(clamp_score(score))
}

/// Reported milestone score: the weighted sum rounded to an integer in [0, 100].
pub fn milestone_score(weighted: f64) -> u8 {
    clamp_score(weighted.round()) as u8
}

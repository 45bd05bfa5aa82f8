use milestone_core::config::ReasoningThresholds;
use milestone_core::constants::ROUTINE_REASONING;
use milestone_core::models::{AssessmentFactors, Factor, FactorKind};

fn clause(kind: FactorKind, factor: &Factor) -> String {
    match kind {
        FactorKind::Complexity => format!("High complexity ({})", factor.value),
        FactorKind::RiskScore => "Elevated risk of regressions".to_string(),
        FactorKind::Domain => format!("Critical domain ({})", factor.value),
        FactorKind::Novelty => "Novel approach required".to_string(),
        FactorKind::Uniqueness => "Few analogous precedents".to_string(),
        FactorKind::Keywords => format!("{} change indicators", capitalize(&factor.value.to_string())),
        FactorKind::FileImpact => format!("Broad file impact (~{} files)", factor.value),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Comma-joined clauses for factors at or above their threshold, in factor order.
pub fn build_reasoning(factors: &AssessmentFactors, thresholds: &ReasoningThresholds) -> String {
    let clauses: Vec<String> = factors
        .iter()
        .filter(|(kind, factor)| factor.score >= thresholds.get(*kind))
        .map(|(kind, factor)| clause(kind, factor))
        .collect();

    if clauses.is_empty() {
        ROUTINE_REASONING.to_string()
    } else {
        clauses.join(", ")
    }
}

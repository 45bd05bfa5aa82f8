//! Domain: which area of the system the mission touches.
//!
//! Collaborator: `IStrategySelector` (domain label + confidence).
//! Heuristic: per-domain vocabulary, most matches wins.

use std::sync::LazyLock;

use milestone_core::errors::{CollaboratorError, MilestoneResult};
use milestone_core::models::{Factor, StrategySelection};

use super::STRATEGY_SELECTOR;
use crate::text::KeywordMatcher;

pub const GENERAL_DOMAIN: &str = "general";

/// Domain → significance score.
pub const DOMAIN_SCORES: [(&str, f64); 10] = [
    ("architecture", 90.0),
    ("security", 90.0),
    ("integration", 80.0),
    ("performance", 70.0),
    ("data", 75.0),
    ("bugfix", 40.0),
    ("testing", 50.0),
    ("frontend", 60.0),
    ("deployment", 85.0),
    (GENERAL_DOMAIN, 50.0),
];

/// Heuristic vocabulary, in tie-break order. Keywords match word prefixes.
pub const DOMAIN_KEYWORDS: [(&str, &[&str]); 9] = [
    (
        "architecture",
        &["architect", "design", "pattern", "structure", "framework"],
    ),
    (
        "security",
        &["security", "auth", "encrypt", "vulnerab", "permission"],
    ),
    (
        "integration",
        &["integrat", "api", "webhook", "connect", "third-party"],
    ),
    (
        "performance",
        &["performance", "optimi", "speed", "latency", "cache"],
    ),
    ("data", &["data", "schema", "query", "migration", "storage"]),
    ("bugfix", &["bug", "fix", "error", "issue", "crash"]),
    ("testing", &["test", "coverage", "assert", "mock", "spec"]),
    ("frontend", &["ui", "component", "css", "layout", "frontend"]),
    (
        "deployment",
        &["deploy", "release", "pipeline", "docker", "rollout"],
    ),
];

pub const HEURISTIC_CONFIDENCE: f64 = 0.6;
pub const DEFAULT_SELECTION_CONFIDENCE: f64 = 0.5;

static MATCHERS: LazyLock<Vec<(&'static str, KeywordMatcher)>> = LazyLock::new(|| {
    DOMAIN_KEYWORDS
        .iter()
        .map(|(domain, keywords)| (*domain, KeywordMatcher::word_prefix(keywords)))
        .collect()
});

/// Score for a domain label; unknown domains score as `general`.
pub fn score_for_domain(domain: &str) -> f64 {
    DOMAIN_SCORES
        .iter()
        .find(|(name, _)| *name == domain)
        .or_else(|| DOMAIN_SCORES.iter().find(|(name, _)| *name == GENERAL_DOMAIN))
        .map(|(_, score)| *score)
        .unwrap_or(50.0)
}

/// Domain with the most keyword matches. Ties go to the earlier domain.
pub fn detect_domain(text: &str) -> &'static str {
    let mut best = GENERAL_DOMAIN;
    let mut best_count = 0;
    for (domain, matcher) in MATCHERS.iter() {
        let count = matcher.count(text);
        if count > best_count {
            best = *domain;
            best_count = count;
        }
    }
    best
}

pub fn heuristic(text: &str) -> Factor {
    let domain = detect_domain(text);
    Factor::labelled(domain, score_for_domain(domain), HEURISTIC_CONFIDENCE)
}

pub fn from_selection(selection: &StrategySelection) -> MilestoneResult<Factor> {
    let domain = selection.domain.trim().to_lowercase();
    if domain.is_empty() {
        return Err(CollaboratorError::InvalidResponse {
            collaborator: STRATEGY_SELECTOR.to_string(),
            reason: "empty domain".to_string(),
        }
        .into());
    }
    let confidence = selection
        .confidence_score
        .unwrap_or(DEFAULT_SELECTION_CONFIDENCE);
    if !(0.0..=1.0).contains(&confidence) {
        return Err(CollaboratorError::InvalidResponse {
            collaborator: STRATEGY_SELECTOR.to_string(),
            reason: format!("confidenceScore {confidence} outside [0, 1]"),
        }
        .into());
    }
    let score = score_for_domain(&domain);
    Ok(Factor::labelled(domain, score, confidence))
}

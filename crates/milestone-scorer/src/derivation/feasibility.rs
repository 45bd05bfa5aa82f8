use std::sync::LazyLock;

use regex::Regex;

use milestone_core::models::{clamp_score, AssessmentFactors, FeasibilityResult, LevelAssessment};

use crate::text::word_count;

/// Requests longer than this many words count as detailed.
pub const DETAIL_WORD_THRESHOLD: usize = 10;

pub const CLARITY_DETAILED_WITH_CONTEXT: u8 = 85;
pub const CLARITY_DETAILED: u8 = 70;
pub const CLARITY_CONTEXT: u8 = 60;
pub const CLARITY_BARE: u8 = 50;

static CONTEXT_MARKERS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(with|using|via|through|by)\b").ok());

pub fn clarity_score(text: &str) -> u8 {
    let has_details = word_count(text) > DETAIL_WORD_THRESHOLD;
    let has_context = CONTEXT_MARKERS
        .as_ref()
        .is_some_and(|re| re.is_match(text));

    match (has_details, has_context) {
        (true, true) => CLARITY_DETAILED_WITH_CONTEXT,
        (true, false) => CLARITY_DETAILED,
        (false, true) => CLARITY_CONTEXT,
        (false, false) => CLARITY_BARE,
    }
}

pub fn approach_risk(complexity: f64, risk: f64) -> LevelAssessment {
    if complexity > 75.0 || risk > 70.0 {
        LevelAssessment::High
    } else if complexity > 50.0 || risk > 50.0 {
        LevelAssessment::Moderate
    } else {
        LevelAssessment::Low
    }
}

pub fn feasibility_level(score: u8) -> LevelAssessment {
    if score >= 70 {
        LevelAssessment::High
    } else if score >= 50 {
        LevelAssessment::Moderate
    } else {
        LevelAssessment::Low
    }
}

/// Feasibility from complexity, risk, and how clearly the request is phrased.
pub fn derive_feasibility(text: &str, factors: &AssessmentFactors) -> FeasibilityResult {
    let clarity = clarity_score(text);
    let complexity = factors.complexity.score;
    let risk = factors.risk_score.score;

    let raw = 100.0 - (complexity * 0.4 + risk * 0.4 + (100.0 - f64::from(clarity)) * 0.2);
    let score = clamp_score(raw.round()) as u8;

    FeasibilityResult {
        score,
        clarity_score: clarity,
        approach_risk: approach_risk(complexity, risk),
        assessment: feasibility_level(score),
    }
}

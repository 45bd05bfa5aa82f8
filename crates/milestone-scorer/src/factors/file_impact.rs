//! File impact: rough number of files the mission will touch. Always heuristic.
//!
//! Checks are substring matches on the raw text (case-sensitive), first match wins.

use std::sync::LazyLock;

use regex::Regex;

use milestone_core::models::Factor;

/// Ordered (pattern, estimated files) checks.
pub const FILE_IMPACT_RULES: [(&str, u32); 3] = [
    ("system|framework|architecture|migrate", 15),
    ("module|feature|integration", 8),
    ("component|endpoint|function", 3),
];

pub const DEFAULT_ESTIMATED_FILES: u32 = 1;
pub const SCORE_PER_FILE: f64 = 8.0;
pub const CONFIDENCE: f64 = 0.6;

static RULES: LazyLock<Vec<(Regex, u32)>> = LazyLock::new(|| {
    FILE_IMPACT_RULES
        .iter()
        .filter_map(|(pattern, files)| Regex::new(pattern).ok().map(|re| (re, *files)))
        .collect()
});

pub fn estimate_files(text: &str) -> u32 {
    RULES
        .iter()
        .find(|(re, _)| re.is_match(text))
        .map(|(_, files)| *files)
        .unwrap_or(DEFAULT_ESTIMATED_FILES)
}

pub fn heuristic(text: &str) -> Factor {
    let files = estimate_files(text);
    let score = (f64::from(files) * SCORE_PER_FILE).min(100.0);
    Factor::numeric(f64::from(files), score, CONFIDENCE)
}

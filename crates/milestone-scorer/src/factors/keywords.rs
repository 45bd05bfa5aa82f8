//! Keywords: tiered significance vocabulary. Always heuristic.
//!
//! The highest-weight tier with at least one match wins. With no match the
//! label stays `minor` while the score stays 0, not the minor tier's 25.

use std::sync::LazyLock;

use milestone_core::models::Factor;

use crate::text::KeywordMatcher;

pub const CRITICAL_KEYWORDS: [&str; 13] = [
    "migrate",
    "architecture",
    "redesign",
    "rebuild",
    "authentication",
    "authorization",
    "payment",
    "security",
    "schema",
    "breaking change",
    "major refactor",
    "complete rewrite",
    "new framework",
];

pub const MAJOR_KEYWORDS: [&str; 14] = [
    "implement",
    "create",
    "add feature",
    "new system",
    "optimization",
    "performance",
    "real-time",
    "caching",
    "dashboard",
    "module",
    "significant",
    "enhancement",
    "major",
    "complex",
];

pub const MODERATE_KEYWORDS: [&str; 10] = [
    "enhance",
    "improve",
    "refactor",
    "fix bug",
    "add endpoint",
    "update",
    "modify",
    "extend",
    "component",
    "feature",
];

pub const MINOR_KEYWORDS: [&str; 8] = [
    "tweak",
    "adjust",
    "small fix",
    "minor",
    "ui fix",
    "text change",
    "config",
    "documentation",
];

pub const CONFIDENCE: f64 = 0.9;

/// Label reported when nothing matches.
pub const UNMATCHED_CATEGORY: &str = "minor";

struct Tier {
    category: &'static str,
    weight: f64,
    matcher: KeywordMatcher,
}

static TIERS: LazyLock<[Tier; 4]> = LazyLock::new(|| {
    [
        Tier {
            category: "critical",
            weight: 100.0,
            matcher: KeywordMatcher::whole_word(&CRITICAL_KEYWORDS),
        },
        Tier {
            category: "major",
            weight: 75.0,
            matcher: KeywordMatcher::whole_word(&MAJOR_KEYWORDS),
        },
        Tier {
            category: "moderate",
            weight: 50.0,
            matcher: KeywordMatcher::whole_word(&MODERATE_KEYWORDS),
        },
        Tier {
            category: "minor",
            weight: 25.0,
            matcher: KeywordMatcher::whole_word(&MINOR_KEYWORDS),
        },
    ]
});

pub fn heuristic(text: &str) -> Factor {
    let mut category = UNMATCHED_CATEGORY;
    let mut max_score = 0.0;
    for tier in TIERS.iter() {
        if tier.weight > max_score && tier.matcher.any(text) {
            category = tier.category;
            max_score = tier.weight;
        }
    }
    Factor::labelled(category, max_score, CONFIDENCE)
}

use milestone_core::models::{Classification, RestorePointStrategy};
use milestone_scorer::MilestoneScorer;
use proptest::prelude::*;

fn assess(text: &str) -> milestone_core::Assessment {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    rt.block_on(MilestoneScorer::default().assess_request(text))
}

const VOCABULARY: &[&str] = &[
    "migrate", "architecture", "tweak", "new", "module", "component", "fix", "bug", "payment",
    "security", "implement", "with", "using", "the", "a", "schema", "deploy", "test", "ui",
    "first time", "breaking change", "api", "database", "system",
];

fn mission_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..40).prop_map(|w| w.join(" "))
}

// ── Every score stays in [0, 100] ─────────────────────────────────────────

proptest! {
    #[test]
    fn scores_stay_in_range_for_arbitrary_text(text in "\\PC{0,200}") {
        let a = assess(&text);
        prop_assert!(a.milestone_score <= 100);
        for (kind, factor) in a.factors.iter() {
            prop_assert!(
                (0.0..=100.0).contains(&factor.score),
                "{} score {} out of range", kind, factor.score
            );
            prop_assert!((0.0..=1.0).contains(&factor.confidence));
        }
        prop_assert!(a.feasibility.score <= 100);
        prop_assert!(a.uncertainty.score <= 100);
        prop_assert!(!a.is_fallback);
    }

    #[test]
    fn scores_stay_in_range_for_domain_vocabulary(text in mission_text()) {
        let a = assess(&text);
        prop_assert!(a.milestone_score <= 100);
        for (_, factor) in a.factors.iter() {
            prop_assert!((0.0..=100.0).contains(&factor.score));
        }
    }
}

// ── Classification and strategy are pure functions ────────────────────────

proptest! {
    #[test]
    fn classification_follows_the_score(text in mission_text()) {
        let a = assess(&text);
        prop_assert_eq!(a.classification, Classification::from_score(a.milestone_score));
        prop_assert_eq!(
            a.restore_point_strategy,
            RestorePointStrategy::for_classification(a.classification)
        );
    }

    #[test]
    fn classification_is_monotonic(lo in 0u8..=100, hi in 0u8..=100) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        prop_assert!(Classification::from_score(lo) <= Classification::from_score(hi));
    }

    #[test]
    fn critical_keyword_always_wins(prefix in mission_text(), suffix in mission_text()) {
        let text = format!("{prefix} tweak {suffix} migrate");
        let a = assess(&text);
        prop_assert_eq!(a.factors.keywords.value.as_label(), Some("critical"));
        prop_assert_eq!(a.factors.keywords.score, 100.0);
    }
}

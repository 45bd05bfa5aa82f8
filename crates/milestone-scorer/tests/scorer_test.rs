//! Integration tests for MilestoneScorer: collaborators, fallbacks, and the
//! pure-function guarantees of classification and restore strategy.

use std::sync::Arc;
use std::time::Duration;

use milestone_core::config::{FactorWeights, ScorerConfig};
use milestone_core::models::{
    BackupType, Classification, FactorKind, LevelAssessment, RestorePointStrategy,
};
use milestone_scorer::MilestoneScorer;
use serde_json::json;
use test_fixtures::mocks::*;

const MIGRATION: &str = "migrate the authentication system to a new architecture with breaking changes to the payment schema";

// ---------------------------------------------------------------------------
// Heuristic mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn small_bug_fix_needs_no_backup() {
    let a = MilestoneScorer::default()
        .assess_request("fix a small bug")
        .await;
    assert!(matches!(
        a.classification,
        Classification::Trivial | Classification::Minor
    ));
    assert_eq!(a.restore_point_strategy.backup_type, BackupType::None);
    assert!(a.factors.complexity.score <= 30.0);
    assert!(a.factors.risk_score.score <= 20.0);
    assert_eq!(a.factors.keywords.score, 0.0);
    assert!(a.degradations.is_empty());
    // 100 - (30 * 0.4 + 20 * 0.4 + 50 * 0.2) = 70
    assert_eq!(a.feasibility.score, 70);
    assert_eq!(a.feasibility.assessment, LevelAssessment::High);
}

#[tokio::test]
async fn migration_request_is_major_with_full_backups() {
    let a = MilestoneScorer::default().assess_request(MIGRATION).await;
    assert_eq!(a.factors.keywords.value.as_label(), Some("critical"));
    assert!(matches!(
        a.factors.domain.value.as_label(),
        Some("security") | Some("architecture")
    ));
    assert_eq!(a.factors.file_impact.value.as_number(), Some(15.0));
    assert!(a.classification >= Classification::Major);
    assert_eq!(a.restore_point_strategy.backup_type, BackupType::Full);
    assert_eq!(a.restore_point_strategy.backups, 2);
    assert!(a.restore_point_strategy.pre_mission);
}

#[tokio::test]
async fn migration_feasibility_and_uncertainty() {
    let a = MilestoneScorer::default().assess_request(MIGRATION).await;
    // 100 - (50 * 0.4 + 100 * 0.4 + 15 * 0.2) = 37
    assert_eq!(a.feasibility.clarity_score, 85);
    assert_eq!(a.feasibility.score, 37);
    assert_eq!(a.feasibility.approach_risk, LevelAssessment::High);
    assert_eq!(a.feasibility.assessment, LevelAssessment::Low);
    // avg confidence (5 * 0.6 + 0.5 + 0.9) / 7 ≈ 0.629
    assert_eq!(a.uncertainty.avg_confidence, 63);
    assert_eq!(a.uncertainty.score, 50);
    assert_eq!(a.uncertainty.assessment, LevelAssessment::Moderate);
}

#[tokio::test]
async fn empty_request_returns_complete_assessment() {
    let a = MilestoneScorer::default().assess_request("").await;
    assert!(!a.is_fallback);
    assert!(a.milestone_score < 40);
    assert_eq!(a.reasoning, "Routine operation with low impact.");
    assert_eq!(a.feasibility.clarity_score, 50);
}

#[tokio::test]
async fn heuristic_mode_is_idempotent_except_timestamp() {
    let scorer = MilestoneScorer::default();
    let mut first = scorer.assess_request(MIGRATION).await;
    let second = scorer.assess_request(MIGRATION).await;
    first.timestamp = second.timestamp;
    assert_eq!(first, second);
}

#[tokio::test]
async fn context_does_not_change_the_result() {
    let scorer = MilestoneScorer::default();
    let mut with_context = scorer
        .assess(MIGRATION, &json!({"project": "billing", "branch": "main"}))
        .await;
    let without = scorer.assess_request(MIGRATION).await;
    with_context.timestamp = without.timestamp;
    assert_eq!(with_context, without);
}

#[tokio::test]
async fn same_classification_gives_identical_strategy() {
    let scorer = MilestoneScorer::default();
    let a = scorer.assess_request("fix a small bug").await;
    let b = scorer.assess_request("rename a variable").await;
    assert_eq!(a.classification, b.classification);
    assert_eq!(
        serde_json::to_string(&a.restore_point_strategy).unwrap(),
        serde_json::to_string(&b.restore_point_strategy).unwrap()
    );
    assert_eq!(
        a.restore_point_strategy,
        RestorePointStrategy::for_classification(a.classification)
    );
}

#[tokio::test]
async fn milestone_score_is_the_weighted_factor_sum() {
    let a = MilestoneScorer::default().assess_request(MIGRATION).await;
    let weights = FactorWeights::default();
    let expected: f64 = a
        .factors
        .iter()
        .map(|(kind, f)| f.score * weights.get(kind))
        .sum();
    assert_eq!(a.milestone_score, expected.round() as u8);
    assert_eq!(
        a.classification,
        Classification::from_score(a.milestone_score)
    );
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

#[tokio::test]
async fn predictor_drives_complexity_and_risk() {
    let predictor = Arc::new(FixedPredictor::with("extreme", 85.0, 0.9));
    let scorer = MilestoneScorer::default().with_predictor(predictor.clone());
    let a = scorer.assess_request("fix a small bug").await;

    assert_eq!(a.factors.complexity.value.as_label(), Some("extreme"));
    assert_eq!(a.factors.complexity.score, 95.0);
    assert_eq!(a.factors.complexity.confidence, 0.9);
    assert_eq!(a.factors.risk_score.score, 85.0);
    // One call per factor that uses it.
    assert_eq!(predictor.calls(), 2);
    assert!(a.degradations.is_empty());
}

#[tokio::test]
async fn all_collaborators_together() {
    let search = Arc::new(FixedKnowledgeSearch::new(vec![80.0, 35.0, 10.0]));
    let scorer = MilestoneScorer::default()
        .with_predictor(Arc::new(FixedPredictor::with("complex", 60.0, 0.8)))
        .with_strategy_selector(Arc::new(FixedStrategySelector::new("deployment", 0.75)))
        .with_risk_assessor(Arc::new(FixedRiskAssessor {
            novelty_factor: Some(90.0),
        }))
        .with_knowledge_search(search.clone());
    let a = scorer.assess_request("roll out the new release").await;

    assert_eq!(a.factors.domain.value.as_label(), Some("deployment"));
    assert_eq!(a.factors.domain.score, 85.0);
    assert_eq!(a.factors.novelty.score, 90.0);
    assert_eq!(a.factors.novelty.confidence, 0.7);
    assert_eq!(a.factors.uniqueness.score, 20.0);
    assert_eq!(a.factors.uniqueness.confidence, 0.8);
    assert_eq!(search.last_limit(), 5);
    assert!(a.degradations.is_empty());
}

#[tokio::test]
async fn knowledge_search_without_matches_is_fully_unique() {
    let scorer = MilestoneScorer::default()
        .with_knowledge_search(Arc::new(FixedKnowledgeSearch::new(Vec::new())));
    let a = scorer.assess_request("port the scheduler").await;
    assert_eq!(a.factors.uniqueness.score, 100.0);
}

#[tokio::test]
async fn failing_selector_only_degrades_domain() {
    let scorer = MilestoneScorer::default()
        .with_predictor(Arc::new(FixedPredictor::with("complex", 60.0, 0.8)))
        .with_strategy_selector(Arc::new(FailingStrategySelector))
        .with_risk_assessor(Arc::new(FixedRiskAssessor {
            novelty_factor: Some(40.0),
        }));
    let a = scorer.assess_request(MIGRATION).await;

    assert!(!a.is_fallback);
    // Domain fell back to the text heuristic.
    assert_eq!(a.factors.domain.value.as_label(), Some("architecture"));
    assert_eq!(a.factors.domain.confidence, 0.6);
    // Working collaborators are unaffected.
    assert_eq!(a.factors.complexity.score, 75.0);
    assert_eq!(a.factors.risk_score.score, 60.0);
    assert_eq!(a.factors.novelty.score, 40.0);

    assert_eq!(a.degradations.len(), 1);
    assert_eq!(a.degradations[0].component, "domain");
    assert!(a.degradations[0].failure.contains("strategy_selector"));
}

#[tokio::test]
async fn panicking_selector_only_degrades_domain() {
    let scorer =
        MilestoneScorer::default().with_strategy_selector(Arc::new(PanickingStrategySelector));
    let a = scorer.assess_request("fix a small bug").await;

    assert!(!a.is_fallback);
    assert_eq!(a.factors.domain.value.as_label(), Some("bugfix"));
    assert_eq!(a.factors.domain.confidence, 0.6);
    assert_eq!(a.degradations.len(), 1);
    assert_eq!(a.degradations[0].component, "domain");
    assert!(a.degradations[0].failure.contains("panicked"));
}

#[test]
fn runtime_without_timers_degrades_collaborators() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let scorer = MilestoneScorer::default()
        .with_knowledge_search(Arc::new(FixedKnowledgeSearch::new(vec![30.0])));
    let a = runtime.block_on(scorer.assess_request("port the scheduler"));

    assert!(!a.is_fallback);
    assert_eq!(a.factors.uniqueness.score, 60.0);
    assert_eq!(a.degradations.len(), 1);
    assert_eq!(a.degradations[0].component, "uniqueness");
}

#[tokio::test]
async fn failing_predictor_degrades_both_of_its_factors() {
    let scorer = MilestoneScorer::default().with_predictor(Arc::new(FailingPredictor));
    let a = scorer.assess_request("fix a small bug").await;
    assert_eq!(a.factors.complexity.value.as_label(), Some("simple"));
    assert_eq!(a.factors.risk_score.score, 20.0);
    let components: Vec<&str> = a.degradations.iter().map(|d| d.component.as_str()).collect();
    assert_eq!(components, ["complexity", "riskScore"]);
}

#[tokio::test]
async fn failing_risk_assessor_uses_novelty_heuristic() {
    let scorer = MilestoneScorer::default().with_risk_assessor(Arc::new(FailingRiskAssessor));
    let a = scorer.assess_request("build something for the first time").await;
    assert_eq!(a.factors.novelty.score, 80.0);
    assert_eq!(a.factors.novelty.confidence, 0.6);
    assert_eq!(a.degradations.len(), 1);
}

#[tokio::test]
async fn invalid_collaborator_payload_degrades_that_factor() {
    let scorer = MilestoneScorer::default()
        .with_knowledge_search(Arc::new(FixedKnowledgeSearch::new(vec![f64::NAN])));
    let a = scorer.assess_request("port the scheduler").await;
    assert!(!a.is_fallback);
    assert_eq!(a.factors.uniqueness.score, 60.0);
    assert_eq!(a.factors.uniqueness.confidence, 0.5);
    assert_eq!(a.degradations[0].component, FactorKind::Uniqueness.as_str());
}

#[tokio::test(start_paused = true)]
async fn slow_collaborator_times_out_to_heuristic() {
    let config = ScorerConfig {
        collaborator_timeout_ms: 50,
        ..ScorerConfig::default()
    };
    let scorer = MilestoneScorer::new(config).with_knowledge_search(Arc::new(SlowKnowledgeSearch {
        delay: Duration::from_secs(10),
    }));
    let a = scorer.assess_request("port the scheduler").await;

    assert!(!a.is_fallback);
    assert_eq!(a.factors.uniqueness.score, 60.0);
    assert_eq!(a.degradations.len(), 1);
    assert!(a.degradations[0].failure.contains("timed out"));
}

// ---------------------------------------------------------------------------
// Whole-assessment fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_weights_yield_fallback_assessment() {
    let config = ScorerConfig {
        weights: FactorWeights {
            novelty: 0.9,
            ..FactorWeights::default()
        },
        ..ScorerConfig::default()
    };
    let a = MilestoneScorer::new(config).assess_request(MIGRATION).await;

    assert!(a.is_fallback);
    assert_eq!(a.milestone_score, 50);
    assert_eq!(a.classification, Classification::Moderate);
    assert_eq!(a.reasoning, "Fallback assessment (analysis failed)");
    assert_eq!(a.restore_point_strategy.backup_type, BackupType::Incremental);
    assert!(!a.restore_point_strategy.pre_mission);
    assert!(a.restore_point_strategy.post_mission);
}

// ---------------------------------------------------------------------------
// Recording
// ---------------------------------------------------------------------------

#[tokio::test]
async fn assess_and_record_saves_the_returned_assessment() {
    let store = Arc::new(RecordingStore::default());
    let scorer = MilestoneScorer::default().with_store(store.clone());
    let a = scorer.assess_and_record(MIGRATION, &json!({})).await;

    let saved = store.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0], a);
}

#[tokio::test]
async fn store_failure_still_returns_assessment() {
    let scorer = MilestoneScorer::default().with_store(Arc::new(FailingStore));
    let a = scorer.assess_and_record("fix a small bug", &json!({})).await;
    assert!(!a.is_fallback);
    assert_eq!(a.restore_point_strategy.backup_type, BackupType::None);
}

#[tokio::test]
async fn assess_does_not_touch_the_store() {
    let store = Arc::new(RecordingStore::default());
    let scorer = MilestoneScorer::default().with_store(store.clone());
    scorer.assess_request("fix a small bug").await;
    assert!(store.saved().is_empty());
}

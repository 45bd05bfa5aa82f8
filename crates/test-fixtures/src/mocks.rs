//! Mock collaborators for scorer tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use milestone_core::errors::{CollaboratorError, MilestoneError, MilestoneResult};
use milestone_core::models::{
    AnalogousProblem, Assessment, ConfidenceInterval, MissionPrediction, RiskAssessment,
    StrategySelection,
};
use milestone_core::traits::{
    IAssessmentStore, IKnowledgeSearch, IMissionPredictor, IRiskAssessor, IStrategySelector,
};

fn failure(collaborator: &str) -> MilestoneError {
    CollaboratorError::Failed {
        collaborator: collaborator.to_string(),
        reason: "service unavailable".to_string(),
    }
    .into()
}

// ── Mission predictor ─────────────────────────────────────────────────────

/// Returns the same prediction every time and counts calls.
pub struct FixedPredictor {
    prediction: MissionPrediction,
    calls: AtomicUsize,
}

impl FixedPredictor {
    pub fn new(prediction: MissionPrediction) -> Self {
        Self {
            prediction,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with(complexity: &str, risk: f64, confidence: f64) -> Self {
        Self::new(MissionPrediction {
            estimated_complexity: Some(complexity.to_string()),
            risk_score: Some(risk),
            confidence_interval: Some(ConfidenceInterval {
                lower: None,
                upper: None,
                confidence: Some(confidence),
            }),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IMissionPredictor for FixedPredictor {
    async fn predict_mission_characteristics(&self, _: &str) -> MilestoneResult<MissionPrediction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.prediction.clone())
    }
}

pub struct FailingPredictor;

#[async_trait]
impl IMissionPredictor for FailingPredictor {
    async fn predict_mission_characteristics(&self, _: &str) -> MilestoneResult<MissionPrediction> {
        Err(failure("mission_predictor"))
    }
}

// ── Strategy selector ─────────────────────────────────────────────────────

pub struct FixedStrategySelector {
    pub domain: String,
    pub confidence: Option<f64>,
}

impl FixedStrategySelector {
    pub fn new(domain: &str, confidence: f64) -> Self {
        Self {
            domain: domain.to_string(),
            confidence: Some(confidence),
        }
    }
}

#[async_trait]
impl IStrategySelector for FixedStrategySelector {
    async fn select_optimal_strategy(&self, _: &str) -> MilestoneResult<StrategySelection> {
        Ok(StrategySelection {
            domain: self.domain.clone(),
            confidence_score: self.confidence,
        })
    }
}

pub struct FailingStrategySelector;

#[async_trait]
impl IStrategySelector for FailingStrategySelector {
    async fn select_optimal_strategy(&self, _: &str) -> MilestoneResult<StrategySelection> {
        Err(failure("strategy_selector"))
    }
}

/// Panics on every call.
pub struct PanickingStrategySelector;

#[async_trait]
impl IStrategySelector for PanickingStrategySelector {
    async fn select_optimal_strategy(&self, _: &str) -> MilestoneResult<StrategySelection> {
        panic!("strategy selector bug")
    }
}

// ── Risk assessor ─────────────────────────────────────────────────────────

pub struct FixedRiskAssessor {
    pub novelty_factor: Option<f64>,
}

#[async_trait]
impl IRiskAssessor for FixedRiskAssessor {
    async fn assess_risk(&self, _: &str) -> MilestoneResult<RiskAssessment> {
        Ok(RiskAssessment {
            novelty_factor: self.novelty_factor,
        })
    }
}

pub struct FailingRiskAssessor;

#[async_trait]
impl IRiskAssessor for FailingRiskAssessor {
    async fn assess_risk(&self, _: &str) -> MilestoneResult<RiskAssessment> {
        Err(failure("risk_assessor"))
    }
}

// ── Knowledge search ──────────────────────────────────────────────────────

/// Returns the given similarities, truncated to the requested limit.
pub struct FixedKnowledgeSearch {
    pub similarities: Vec<f64>,
    last_limit: AtomicUsize,
}

impl FixedKnowledgeSearch {
    pub fn new(similarities: Vec<f64>) -> Self {
        Self {
            similarities,
            last_limit: AtomicUsize::new(0),
        }
    }

    pub fn last_limit(&self) -> usize {
        self.last_limit.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IKnowledgeSearch for FixedKnowledgeSearch {
    async fn find_analogous_problems(
        &self,
        _: &str,
        limit: usize,
    ) -> MilestoneResult<Vec<AnalogousProblem>> {
        self.last_limit.store(limit, Ordering::SeqCst);
        Ok(self
            .similarities
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, s)| AnalogousProblem {
                id: Some(format!("problem-{i}")),
                similarity: *s,
            })
            .collect())
    }
}

/// Sleeps before answering; used to exercise collaborator timeouts.
pub struct SlowKnowledgeSearch {
    pub delay: Duration,
}

#[async_trait]
impl IKnowledgeSearch for SlowKnowledgeSearch {
    async fn find_analogous_problems(
        &self,
        _: &str,
        _: usize,
    ) -> MilestoneResult<Vec<AnalogousProblem>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}

// ── Assessment store ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingStore {
    saved: Mutex<Vec<Assessment>>,
}

impl RecordingStore {
    pub fn saved(&self) -> Vec<Assessment> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl IAssessmentStore for RecordingStore {
    async fn save_assessment(&self, assessment: &Assessment) -> MilestoneResult<()> {
        self.saved
            .lock()
            .map_err(|e| MilestoneError::StorageError {
                reason: e.to_string(),
            })?
            .push(assessment.clone());
        Ok(())
    }
}

pub struct FailingStore;

#[async_trait]
impl IAssessmentStore for FailingStore {
    async fn save_assessment(&self, _: &Assessment) -> MilestoneResult<()> {
        Err(MilestoneError::StorageError {
            reason: "disk full".to_string(),
        })
    }
}

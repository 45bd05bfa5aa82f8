//! MilestoneScorer — computes the seven factors, combines them, and derives
//! classification, reasoning, feasibility, uncertainty, and restore strategy.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use milestone_core::config::ScorerConfig;
use milestone_core::errors::MilestoneResult;
use milestone_core::models::{
    Assessment, AssessmentFactors, Classification, DegradationEvent, FactorKind,
    RestorePointStrategy,
};
use milestone_core::traits::{
    IAssessmentStore, IKnowledgeSearch, IMissionPredictor, IRiskAssessor, IStrategySelector,
};
use milestone_observability::events;
use serde_json::Value;
use tracing::Instrument;

use crate::collaborator::{call_with_timeout, resolve, FactorOutcome};
use crate::derivation::{
    build_reasoning, derive_feasibility, derive_uncertainty, milestone_score, weighted_score,
};
use crate::factors::{
    self, complexity, domain, file_impact, keywords, novelty, risk, uniqueness,
};
use crate::text::word_count;

const ASSESSMENT_STORE: &str = "assessment_store";

/// Scores free-text mission requests for milestone significance.
///
/// Collaborators are optional. A factor whose collaborator is absent uses its
/// text heuristic; one whose collaborator fails or times out also uses its
/// heuristic and the failure is recorded in `Assessment::degradations`.
pub struct MilestoneScorer {
    config: ScorerConfig,
    predictor: Option<Arc<dyn IMissionPredictor>>,
    strategy_selector: Option<Arc<dyn IStrategySelector>>,
    risk_assessor: Option<Arc<dyn IRiskAssessor>>,
    knowledge_search: Option<Arc<dyn IKnowledgeSearch>>,
    store: Option<Arc<dyn IAssessmentStore>>,
}

impl Default for MilestoneScorer {
    fn default() -> Self {
        Self::new(ScorerConfig::default())
    }
}

impl MilestoneScorer {
    /// Create a scorer in pure heuristic mode.
    pub fn new(config: ScorerConfig) -> Self {
        Self {
            config,
            predictor: None,
            strategy_selector: None,
            risk_assessor: None,
            knowledge_search: None,
            store: None,
        }
    }

    pub fn with_predictor(mut self, predictor: Arc<dyn IMissionPredictor>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn with_strategy_selector(mut self, selector: Arc<dyn IStrategySelector>) -> Self {
        self.strategy_selector = Some(selector);
        self
    }

    pub fn with_risk_assessor(mut self, assessor: Arc<dyn IRiskAssessor>) -> Self {
        self.risk_assessor = Some(assessor);
        self
    }

    pub fn with_knowledge_search(mut self, search: Arc<dyn IKnowledgeSearch>) -> Self {
        self.knowledge_search = Some(search);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn IAssessmentStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    fn timeout(&self) -> Duration {
        self.config.collaborator_timeout()
    }

    /// Assess a mission request. Never fails: any error escaping the
    /// computation yields `Assessment::fallback()`.
    ///
    /// `context` is opaque and currently only logged.
    ///
    /// Collaborator calls are bounded by a Tokio timer, so the runtime should
    /// be built with `enable_time` (or `enable_all`). Without timers every
    /// configured collaborator degrades to its heuristic.
    pub async fn assess(&self, mission_request: &str, context: &Value) -> Assessment {
        let span = tracing::info_span!(
            "milestone_assessment",
            request_words = word_count(mission_request),
            context_keys = context.as_object().map_or(0, |o| o.len())
        );

        match self.try_assess(mission_request).instrument(span).await {
            Ok(assessment) => {
                events::assessment_completed(
                    assessment.milestone_score,
                    assessment.classification,
                    assessment.degradations.len(),
                );
                assessment
            }
            Err(e) => {
                events::fallback_assessment(&e.to_string());
                Assessment::fallback()
            }
        }
    }

    /// `assess` with an empty context.
    pub async fn assess_request(&self, mission_request: &str) -> Assessment {
        self.assess(mission_request, &Value::Null).await
    }

    /// `assess`, then hand the result to the configured store.
    ///
    /// A store failure is logged; the assessment is returned regardless.
    pub async fn assess_and_record(&self, mission_request: &str, context: &Value) -> Assessment {
        let assessment = self.assess(mission_request, context).await;
        if let Some(store) = &self.store {
            let saved = call_with_timeout(
                ASSESSMENT_STORE,
                self.timeout(),
                store.save_assessment(&assessment),
            )
            .await;
            match saved {
                Ok(()) => events::assessment_recorded(assessment.classification),
                Err(e) => events::assessment_record_failed(&e.to_string()),
            }
        }
        assessment
    }

    async fn try_assess(&self, mission_request: &str) -> MilestoneResult<Assessment> {
        self.config.validate()?;

        let (factors, degradations) = self.evaluate_factors(mission_request).await;

        let weighted = weighted_score(&factors, &self.config.weights)?;
        let score = milestone_score(weighted);
        let classification = Classification::from_score(score);
        let reasoning = build_reasoning(&factors, &self.config.reasoning_thresholds);
        let feasibility = derive_feasibility(mission_request, &factors);
        let uncertainty = derive_uncertainty(&factors, &feasibility);

        tracing::debug!(weighted, score, %classification, "factors combined");

        Ok(Assessment {
            milestone_score: score,
            classification,
            factors,
            reasoning,
            feasibility,
            uncertainty,
            restore_point_strategy: RestorePointStrategy::for_classification(classification),
            timestamp: Utc::now(),
            is_fallback: false,
            degradations,
        })
    }

    /// All seven factors; collaborator-backed ones run concurrently.
    async fn evaluate_factors(
        &self,
        text: &str,
    ) -> (AssessmentFactors, Vec<DegradationEvent>) {
        let (complexity, risk_score, domain, novelty, uniqueness) = tokio::join!(
            self.complexity(text),
            self.risk_score(text),
            self.domain(text),
            self.novelty(text),
            self.uniqueness(text),
        );
        let keywords = FactorOutcome::heuristic(keywords::heuristic(text));
        let file_impact = FactorOutcome::heuristic(file_impact::heuristic(text));

        let outcomes = [
            complexity,
            risk_score,
            domain,
            novelty,
            uniqueness,
            keywords,
            file_impact,
        ];
        let degradations = outcomes
            .iter()
            .filter_map(|o| o.degradation.clone())
            .collect();
        let [complexity, risk_score, domain, novelty, uniqueness, keywords, file_impact] =
            outcomes.map(|o| o.factor);

        (
            AssessmentFactors {
                complexity,
                risk_score,
                domain,
                novelty,
                uniqueness,
                keywords,
                file_impact,
            },
            degradations,
        )
    }

    async fn complexity(&self, text: &str) -> FactorOutcome {
        let Some(predictor) = &self.predictor else {
            return FactorOutcome::heuristic(complexity::heuristic(text));
        };
        let attempt = call_with_timeout(
            factors::PREDICTOR,
            self.timeout(),
            predictor.predict_mission_characteristics(text),
        )
        .await
        .and_then(|prediction| complexity::from_prediction(&prediction));
        resolve(FactorKind::Complexity, factors::PREDICTOR, attempt, || {
            complexity::heuristic(text)
        })
    }

    async fn risk_score(&self, text: &str) -> FactorOutcome {
        let Some(predictor) = &self.predictor else {
            return FactorOutcome::heuristic(risk::heuristic(text));
        };
        let attempt = call_with_timeout(
            factors::PREDICTOR,
            self.timeout(),
            predictor.predict_mission_characteristics(text),
        )
        .await
        .and_then(|prediction| risk::from_prediction(&prediction));
        resolve(FactorKind::RiskScore, factors::PREDICTOR, attempt, || {
            risk::heuristic(text)
        })
    }

    async fn domain(&self, text: &str) -> FactorOutcome {
        let Some(selector) = &self.strategy_selector else {
            return FactorOutcome::heuristic(domain::heuristic(text));
        };
        let attempt = call_with_timeout(
            factors::STRATEGY_SELECTOR,
            self.timeout(),
            selector.select_optimal_strategy(text),
        )
        .await
        .and_then(|selection| domain::from_selection(&selection));
        resolve(FactorKind::Domain, factors::STRATEGY_SELECTOR, attempt, || {
            domain::heuristic(text)
        })
    }

    async fn novelty(&self, text: &str) -> FactorOutcome {
        let Some(assessor) = &self.risk_assessor else {
            return FactorOutcome::heuristic(novelty::heuristic(text));
        };
        let attempt = call_with_timeout(
            factors::RISK_ASSESSOR,
            self.timeout(),
            assessor.assess_risk(text),
        )
        .await
        .and_then(|assessment| novelty::from_risk_assessment(&assessment));
        resolve(FactorKind::Novelty, factors::RISK_ASSESSOR, attempt, || {
            novelty::heuristic(text)
        })
    }

    async fn uniqueness(&self, text: &str) -> FactorOutcome {
        let Some(search) = &self.knowledge_search else {
            return FactorOutcome::heuristic(uniqueness::heuristic());
        };
        let attempt = call_with_timeout(
            factors::KNOWLEDGE_SEARCH,
            self.timeout(),
            search.find_analogous_problems(text, self.config.analogous_problem_limit),
        )
        .await
        .and_then(|problems| uniqueness::from_analogous_problems(&problems));
        resolve(
            FactorKind::Uniqueness,
            factors::KNOWLEDGE_SEARCH,
            attempt,
            uniqueness::heuristic,
        )
    }
}

mod assessment_store;
mod knowledge_search;
mod mission_predictor;
mod risk_assessor;
mod strategy_selector;

pub use assessment_store::IAssessmentStore;
pub use knowledge_search::IKnowledgeSearch;
pub use mission_predictor::IMissionPredictor;
pub use risk_assessor::IRiskAssessor;
pub use strategy_selector::IStrategySelector;

use serde::{Deserialize, Serialize};

/// Reported confidence band around a mission prediction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    /// Confidence in [0, 1].
    pub confidence: Option<f64>,
}

/// Output of `IMissionPredictor::predict_mission_characteristics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPrediction {
    /// One of trivial / simple / moderate / complex / extreme.
    pub estimated_complexity: Option<String>,
    /// Risk on the 0–100 scale.
    pub risk_score: Option<f64>,
    pub confidence_interval: Option<ConfidenceInterval>,
}

/// Output of `IStrategySelector::select_optimal_strategy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySelection {
    pub domain: String,
    pub confidence_score: Option<f64>,
}

/// Output of `IRiskAssessor::assess_risk`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Novelty on the 0–100 scale.
    pub novelty_factor: Option<f64>,
}

/// One analogous problem returned by knowledge search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalogousProblem {
    pub id: Option<String>,
    /// Similarity on the 0–100 scale.
    pub similarity: f64,
}

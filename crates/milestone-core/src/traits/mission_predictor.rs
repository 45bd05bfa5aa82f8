use async_trait::async_trait;

use crate::errors::MilestoneResult;
use crate::models::MissionPrediction;

/// Predicts complexity and risk of a mission from its request text.
#[async_trait]
pub trait IMissionPredictor: Send + Sync {
    async fn predict_mission_characteristics(
        &self,
        mission_request: &str,
    ) -> MilestoneResult<MissionPrediction>;
}

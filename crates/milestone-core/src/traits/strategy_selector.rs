use async_trait::async_trait;

use crate::errors::MilestoneResult;
use crate::models::StrategySelection;

/// Picks the problem domain (and implied strategy) for a mission.
#[async_trait]
pub trait IStrategySelector: Send + Sync {
    async fn select_optimal_strategy(
        &self,
        mission_request: &str,
    ) -> MilestoneResult<StrategySelection>;
}

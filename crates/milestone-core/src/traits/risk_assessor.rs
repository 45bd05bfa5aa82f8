use async_trait::async_trait;

use crate::errors::MilestoneResult;
use crate::models::RiskAssessment;

/// Assesses mission risk; supplies the novelty signal.
#[async_trait]
pub trait IRiskAssessor: Send + Sync {
    async fn assess_risk(&self, mission_request: &str) -> MilestoneResult<RiskAssessment>;
}

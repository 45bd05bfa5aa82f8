use async_trait::async_trait;

use crate::errors::MilestoneResult;
use crate::models::Assessment;

/// Persistence handle for finished assessments. Opaque to the scorer.
#[async_trait]
pub trait IAssessmentStore: Send + Sync {
    async fn save_assessment(&self, assessment: &Assessment) -> MilestoneResult<()>;
}

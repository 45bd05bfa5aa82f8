use async_trait::async_trait;

use crate::errors::MilestoneResult;
use crate::models::AnalogousProblem;

/// Searches a knowledge graph for previously solved, similar problems.
#[async_trait]
pub trait IKnowledgeSearch: Send + Sync {
    /// Return at most `limit` analogous problems, best match first.
    async fn find_analogous_problems(
        &self,
        mission_request: &str,
        limit: usize,
    ) -> MilestoneResult<Vec<AnalogousProblem>>;
}

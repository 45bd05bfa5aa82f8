use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A factor that fell back from its collaborator to the text heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegradationEvent {
    pub component: String,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}

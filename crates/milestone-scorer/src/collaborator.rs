//! Per-factor collaborator calls: timeout, error absorption, degradation tracking.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use chrono::Utc;
use futures::FutureExt;
use milestone_core::errors::{CollaboratorError, MilestoneResult};
use milestone_core::models::{DegradationEvent, Factor, FactorKind};
use milestone_observability::events;

/// Failure reason recorded when a collaborator call panics.
pub const PANICKED: &str = "panicked";

/// A computed factor plus the degradation it went through, if any.
#[derive(Debug, Clone)]
pub struct FactorOutcome {
    pub factor: Factor,
    pub degradation: Option<DegradationEvent>,
}

impl FactorOutcome {
    pub fn heuristic(factor: Factor) -> Self {
        Self {
            factor,
            degradation: None,
        }
    }
}

/// Run a collaborator call under a timeout.
///
/// An elapsed timeout becomes `CollaboratorError::TimedOut`. A panic inside
/// the call, or from the timer itself on a runtime built without
/// `enable_time`, is caught and becomes `CollaboratorError::Failed`.
pub async fn call_with_timeout<T, F>(
    collaborator: &str,
    timeout: Duration,
    call: F,
) -> MilestoneResult<T>
where
    F: Future<Output = MilestoneResult<T>>,
{
    let guarded = AssertUnwindSafe(async move { tokio::time::timeout(timeout, call).await });
    match guarded.catch_unwind().await {
        Ok(Ok(result)) => result,
        Ok(Err(_elapsed)) => Err(CollaboratorError::TimedOut {
            collaborator: collaborator.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        }
        .into()),
        Err(_panic) => Err(CollaboratorError::Failed {
            collaborator: collaborator.to_string(),
            reason: PANICKED.to_string(),
        }
        .into()),
    }
}

/// Use the collaborator's factor when it succeeded, else the heuristic.
///
/// A failed attempt is logged and recorded as a degradation event. The
/// collaborator is not retried.
pub fn resolve(
    kind: FactorKind,
    collaborator: &str,
    attempt: MilestoneResult<Factor>,
    heuristic: impl FnOnce() -> Factor,
) -> FactorOutcome {
    match attempt {
        Ok(factor) => FactorOutcome {
            factor,
            degradation: None,
        },
        Err(e) => {
            let failure = e.to_string();
            events::factor_degraded(kind.as_str(), collaborator, &failure);
            FactorOutcome {
                factor: heuristic(),
                degradation: Some(DegradationEvent {
                    component: kind.as_str().to_string(),
                    failure,
                    fallback_used: "heuristic".to_string(),
                    timestamp: Utc::now(),
                }),
            }
        }
    }
}

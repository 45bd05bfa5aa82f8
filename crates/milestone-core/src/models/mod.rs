mod assessment;
mod classification;
mod collaborator;
mod degradation_event;
mod factor;
mod restore_strategy;

pub use assessment::{Assessment, AssessmentFactors, FeasibilityResult, UncertaintyResult};
pub use classification::{Classification, LevelAssessment};
pub use collaborator::{
    AnalogousProblem, ConfidenceInterval, MissionPrediction, RiskAssessment, StrategySelection,
};
pub use degradation_event::DegradationEvent;
pub use factor::{clamp_score, Factor, FactorKind, FactorValue};
pub use restore_strategy::{BackupType, RestorePointStrategy};

//! # milestone-core
//!
//! Foundation crate for the milestone significance scorer.
//! Defines the assessment model, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{MilestoneConfig, ScorerConfig};
pub use errors::{MilestoneError, MilestoneResult};
pub use models::{
    Assessment, AssessmentFactors, BackupType, Classification, Factor, FactorKind, FactorValue,
    LevelAssessment, RestorePointStrategy,
};

/// Scorer version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound (inclusive) of each classification tier on the 0–100 scale.
pub const CRITICAL_THRESHOLD: u8 = 80;
pub const MAJOR_THRESHOLD: u8 = 60;
pub const MODERATE_THRESHOLD: u8 = 40;
pub const MINOR_THRESHOLD: u8 = 20;

/// Upper bound of every score in the system.
pub const MAX_SCORE: f64 = 100.0;

/// Reasoning used when no factor crosses its reasoning threshold.
pub const ROUTINE_REASONING: &str = "Routine operation with low impact.";

/// Reasoning carried by the fixed fallback assessment.
pub const FALLBACK_REASONING: &str = "Fallback assessment (analysis failed)";

/// Score reported by the fallback assessment.
pub const FALLBACK_MILESTONE_SCORE: u8 = 50;

/// Confidence attached to every factor of the fallback assessment.
pub const FALLBACK_CONFIDENCE: f64 = 0.5;

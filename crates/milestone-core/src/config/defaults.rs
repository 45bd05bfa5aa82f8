// Single source of truth for all default values.

// --- Factor weights (sum to 1.0) ---
pub const DEFAULT_COMPLEXITY_WEIGHT: f64 = 0.15;
pub const DEFAULT_RISK_SCORE_WEIGHT: f64 = 0.15;
pub const DEFAULT_DOMAIN_WEIGHT: f64 = 0.15;
pub const DEFAULT_NOVELTY_WEIGHT: f64 = 0.20;
pub const DEFAULT_UNIQUENESS_WEIGHT: f64 = 0.15;
pub const DEFAULT_KEYWORDS_WEIGHT: f64 = 0.10;
pub const DEFAULT_FILE_IMPACT_WEIGHT: f64 = 0.10;

/// Tolerance when checking that weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// --- Reasoning thresholds (factor score at which a clause is emitted) ---
pub const DEFAULT_COMPLEXITY_REASON_THRESHOLD: f64 = 75.0;
pub const DEFAULT_RISK_SCORE_REASON_THRESHOLD: f64 = 70.0;
pub const DEFAULT_DOMAIN_REASON_THRESHOLD: f64 = 80.0;
pub const DEFAULT_NOVELTY_REASON_THRESHOLD: f64 = 70.0;
pub const DEFAULT_UNIQUENESS_REASON_THRESHOLD: f64 = 80.0;
pub const DEFAULT_KEYWORDS_REASON_THRESHOLD: f64 = 75.0;
pub const DEFAULT_FILE_IMPACT_REASON_THRESHOLD: f64 = 60.0;

// --- Collaborators ---
pub const DEFAULT_COLLABORATOR_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_ANALOGOUS_PROBLEM_LIMIT: usize = 5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

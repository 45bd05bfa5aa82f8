//! # milestone-scorer
//!
//! Classifies a natural-language mission request into a significance tier
//! and derives a restore-point strategy from it.
//!
//! Seven factors (complexity, risk, domain, novelty, uniqueness, keywords,
//! file impact) are scored 0–100, combined with fixed weights, and mapped to
//! TRIVIAL / MINOR / MODERATE / MAJOR / CRITICAL. Optional collaborators can
//! refine four of the factors; every factor has a text heuristic to fall back on.

pub mod collaborator;
pub mod derivation;
pub mod engine;
pub mod factors;
pub mod text;

pub use engine::MilestoneScorer;

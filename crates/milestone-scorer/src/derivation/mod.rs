//! Values derived from the factor set: milestone score, reasoning,
//! feasibility, and uncertainty.

pub mod feasibility;
pub mod reasoning;
pub mod scoring;
pub mod uncertainty;

pub use feasibility::derive_feasibility;
pub use reasoning::build_reasoning;
pub use scoring::{milestone_score, weighted_score};
pub use uncertainty::derive_uncertainty;

//! # milestone-observability
//!
//! Structured logging for the milestone scorer: subscriber setup for hosts
//! and the named events the scorer emits.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};

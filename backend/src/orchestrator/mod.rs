//! Orchestrator - debt analysis assembly
//!
//! Runs the simulators against one customer snapshot and merges the
//! results. See `engine.rs` for the implementation and `audit.rs` for
//! result fingerprinting.

pub mod audit;
pub mod engine;

// Re-export main types for convenience
pub use audit::{fingerprint, AuditError};
pub use engine::{AnalysisError, DebtAnalyzer, NO_ELIGIBLE_OFFERS_MESSAGE};

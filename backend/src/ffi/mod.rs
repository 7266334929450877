//! Python FFI boundary (enabled by the `pyo3` feature)
//!
//! The engine's API host is a Python service; these bindings keep the
//! boundary minimal: dict-shaped records in, dict-shaped results out, and
//! an optional Python callable as the condition evaluator.

pub mod analyzer;
pub mod types;

pub use analyzer::PyDebtAnalyzer;

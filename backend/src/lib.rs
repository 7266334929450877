//! Debt Analyzer Core - Rust Engine
//!
//! Debt-payoff simulation and consolidation-eligibility engine with
//! deterministic execution.
//!
//! # Architecture
//!
//! - **core**: Pure annuity math
//! - **models**: Domain records (Loan, Card, CustomerCashflow, offers, results)
//! - **store**: Customer data provider boundary (in-memory mock)
//! - **simulation**: Month-stepping payoff simulators over working copies
//! - **policy**: Extra-payment recipient selection (avalanche, highest-rate)
//! - **eligibility**: Offer screening and the condition-evaluator capability
//! - **orchestrator**: Analysis assembly and result fingerprinting
//!
//! # Critical Invariants
//!
//! 1. Canonical records are never mutated; simulations work on fresh copies
//! 2. Every simulation terminates within 1000 simulated months
//! 3. Balances never go negative (clamped at zero)
//! 4. Identical input snapshots produce bit-identical results

// Module declarations
pub mod core;
pub mod eligibility;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod simulation;
pub mod store;

// Re-exports for convenience
pub use eligibility::{
    ConditionError, ConditionEvaluator, CustomerProfile, EligibilityEvaluator,
    StaticConditionEvaluator, StaticVerdict,
};
pub use models::{
    Card, ConsolidationOffer, ConsolidationSavings, ConsolidationSimulationResult, CreditScore,
    CustomerCashflow, DebtAnalysisResult, EligibleOffersResponse, Loan, PaymentSimulationResult,
    SavingsComparison, Termination, CARD_PRODUCT_TYPE,
};
pub use orchestrator::{fingerprint, AnalysisError, DebtAnalyzer, NO_ELIGIBLE_OFFERS_MESSAGE};
pub use policy::{AvalanchePolicy, ExtraPaymentPolicy, HighestRatePolicy};
pub use simulation::{
    simulate_avalanche_payments, simulate_consolidation, simulate_minimum_payments, DebtArena,
    Instrument, BALANCE_EPSILON, MONTH_CAP,
};
pub use store::{CustomerData, CustomerDataProvider, InMemoryStore, StoreError};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn debt_analyzer_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::analyzer::PyDebtAnalyzer>()?;
    Ok(())
}

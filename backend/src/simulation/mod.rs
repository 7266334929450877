//! Payoff simulators
//!
//! Month-stepping payoff simulations over private working copies:
//!
//! - **minimum**: scheduled/minimum payments only
//! - **avalanche**: minimums plus a budget surplus routed to one priority
//!   debt per month
//! - **consolidation**: merge eligible debts at an offer's terms, then
//!   re-simulate with the surplus chasing the highest rate
//!
//! All simulators are deterministic, synchronous, and bounded by
//! [`MONTH_CAP`]; none of them retains state across calls.

pub mod avalanche;
pub mod consolidation;
pub mod instrument;
pub mod minimum;

/// Hard safety bound on simulated months. The only recovery path for
/// schedules that never converge (e.g. a scheduled payment below accruing
/// interest); results stopped by it report `Termination::MonthCapReached`.
pub const MONTH_CAP: u32 = 1000;

/// Balances at or below this are treated as paid off (floating residue).
pub const BALANCE_EPSILON: f64 = 1e-6;

/// Flat add-on above accrued interest for card minimums, guaranteeing
/// forward progress when the percentage minimum is smaller than interest.
pub const CARD_MINIMUM_FLOOR: f64 = 1.0;

pub use avalanche::simulate_avalanche_payments;
pub use consolidation::simulate_consolidation;
pub use instrument::{DebtArena, Instrument, InstrumentKind};
pub use minimum::simulate_minimum_payments;

//! Minimum-payment payoff simulation
//!
//! Baseline strategy: every instrument receives exactly its scheduled or
//! minimum payment each month until the book is clear.

use crate::models::{Card, Loan, PaymentSimulationResult, Termination};
use crate::simulation::{DebtArena, MONTH_CAP};

/// Simulate paying scheduled/minimum payments only.
///
/// Per month, for every active instrument: accrue interest into the running
/// total, then apply the scheduled payment capped at the payoff amount.
/// Stops when all balances fall within the residue threshold or at the
/// 1000-month cap.
///
/// # Example
/// ```
/// use debt_analyzer_core_rs::models::{Loan, Termination};
/// use debt_analyzer_core_rs::simulation::simulate_minimum_payments;
///
/// // A 0% loan amortizes in exactly its term, interest-free
/// let loans = vec![Loan::new("C-001", "personal", 12_000.0, 0.0, 12)];
/// let result = simulate_minimum_payments(&loans, &[]);
/// assert_eq!(result.months, 12);
/// assert_eq!(result.total_interest, 0.0);
/// assert_eq!(result.termination, Termination::Completed);
/// ```
pub fn simulate_minimum_payments(loans: &[Loan], cards: &[Card]) -> PaymentSimulationResult {
    let mut arena = DebtArena::new(loans, cards);
    let mut months = 0u32;
    let mut total_interest = 0.0f64;

    while !arena.all_paid_off() && months < MONTH_CAP {
        months += 1;
        total_interest += arena.monthly_interest();
        arena.apply_scheduled_payments();
    }

    let termination = if arena.all_paid_off() {
        Termination::Completed
    } else {
        Termination::MonthCapReached
    };

    PaymentSimulationResult {
        months,
        total_interest,
        termination,
    }
}

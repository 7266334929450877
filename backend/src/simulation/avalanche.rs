//! Avalanche ("optimized") payoff simulation
//!
//! Same monthly mechanics as the minimum simulator, plus a fixed monthly
//! budget derived from cashflow data; any surplus over the month's scheduled
//! payments goes to a single priority debt chosen by [`AvalanchePolicy`].

use crate::models::{Card, CustomerCashflow, Loan, PaymentSimulationResult, Termination};
use crate::policy::{AvalanchePolicy, ExtraPaymentPolicy};
use crate::simulation::{DebtArena, BALANCE_EPSILON, MONTH_CAP};

/// Simulate the avalanche strategy.
///
/// The budget is computed once from the cashflow record
/// (`CustomerCashflow::monthly_budget`). Each month:
///
/// 1. accrue interest and apply every scheduled/minimum payment exactly as
///    the minimum simulator does;
/// 2. `extra = max(0, budget − sum of this month's scheduled payments)`
///    (the uncapped scheduled amounts);
/// 3. route the entire surplus to one recipient: delinquent debts first
///    when `cure_past_due_first`, then the highest rate. The recipient
///    absorbs at most its balance; leftover surplus is not spent this month.
///
/// Callers guarantee cashflow presence; the orchestrator surfaces its
/// absence as a lookup failure before ever calling in.
pub fn simulate_avalanche_payments(
    loans: &[Loan],
    cards: &[Card],
    cashflow: &CustomerCashflow,
    cure_past_due_first: bool,
) -> PaymentSimulationResult {
    let budget = cashflow.monthly_budget();
    let policy = AvalanchePolicy { cure_past_due_first };

    let mut arena = DebtArena::new(loans, cards);
    let mut months = 0u32;
    let mut total_interest = 0.0f64;

    while !arena.all_paid_off() && months < MONTH_CAP {
        months += 1;
        total_interest += arena.monthly_interest();

        let scheduled_total = arena.scheduled_payments_total();
        arena.apply_scheduled_payments();

        let extra = (budget - scheduled_total).max(0.0);
        if extra > BALANCE_EPSILON {
            if let Some(idx) = policy.select_recipient(arena.instruments()) {
                arena.instruments_mut()[idx].pay_down(extra);
            }
        }
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

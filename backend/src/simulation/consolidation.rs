//! Consolidation merge-and-resimulate
//!
//! Screens the supplied offers, merges the eligible debts into one
//! synthetic loan at the best (lowest-rate) offer's terms, and re-runs a
//! payoff over the new debt set: minimums first, leftover budget to the
//! single highest-rate instrument.
//!
//! Unlike the other simulators, this loop carries a hard feasibility gate:
//! a month whose required minimums exceed the budget stops the run with
//! `Termination::BudgetExhausted`, reporting the months and interest
//! simulated so far (including the aborted month's accrual).

use tracing::info;

use crate::eligibility::{ConditionEvaluator, EligibilityEvaluator};
use crate::models::{
    Card, ConsolidationOffer, ConsolidationSimulationResult, CustomerCashflow, Loan, Termination,
};
use crate::policy::{ExtraPaymentPolicy, HighestRatePolicy};
use crate::simulation::{DebtArena, BALANCE_EPSILON, MONTH_CAP};

/// Simulate consolidating a customer's eligible debts.
///
/// Returns `None` when no offer survives eligibility screening or the
/// eligible debt rounds down to nothing. That is a legitimate outcome, not an
/// error. Missing cashflow is surfaced by the orchestrator before calling
/// in.
pub fn simulate_consolidation<E: ConditionEvaluator + ?Sized>(
    customer_id: &str,
    loans: &[Loan],
    cards: &[Card],
    cashflow: &CustomerCashflow,
    offers: &[ConsolidationOffer],
    credit_score: u32,
    conditions: &E,
) -> Option<ConsolidationSimulationResult> {
    let budget = cashflow.monthly_budget();

    let screening = EligibilityEvaluator::new(conditions).eligible_offers(
        customer_id,
        loans,
        cards,
        Some(cashflow),
        offers,
        credit_score,
    );
    // Screening sorts ascending by rate, so the first survivor is the best
    let offer = screening.eligible_offers.first()?;

    let (consolidated_loans, remaining_loans): (Vec<&Loan>, Vec<&Loan>) = loans
        .iter()
        .partition(|loan| offer.covers_product_type(loan.product_type()));

    let mut consolidated_amount: f64 =
        consolidated_loans.iter().map(|loan| loan.principal()).sum();
    let remaining_cards: Vec<Card> = if offer.covers_cards() {
        consolidated_amount += cards.iter().map(Card::balance).sum::<f64>();
        Vec::new()
    } else {
        cards.to_vec()
    };

    // Eligibility already bounds the merged sum; the clamp guards the
    // invariant independently of screening
    let consolidated_amount = consolidated_amount.min(offer.max_consolidated_balance);
    if consolidated_amount <= 0.0 {
        return None;
    }

    let synthetic_loan = Loan::new(
        customer_id,
        "consolidation",
        consolidated_amount,
        offer.new_rate_pct,
        offer.max_term_months,
    )
    .with_id(format!("CONS-{}-{}", offer.offer_id, customer_id));

    let mut simulated_loans: Vec<Loan> = Vec::with_capacity(remaining_loans.len() + 1);
    simulated_loans.push(synthetic_loan);
    simulated_loans.extend(remaining_loans.into_iter().cloned());

    let mut arena = DebtArena::new(&simulated_loans, &remaining_cards);
    let mut months = 0u32;
    let mut total_interest = 0.0f64;
    let mut budget_exhausted = false;

    while !arena.all_paid_off() && months < MONTH_CAP {
        months += 1;
        total_interest += arena.monthly_interest();

        let required_minimums = arena.scheduled_payments_total();
        if budget < required_minimums {
            budget_exhausted = true;
            break;
        }

        arena.apply_scheduled_payments();

        let extra = budget - required_minimums;
        if extra > BALANCE_EPSILON {
            if let Some(idx) = HighestRatePolicy.select_recipient(arena.instruments()) {
                arena.instruments_mut()[idx].pay_down(extra);
            }
        }
    }

    let termination = if budget_exhausted {
        Termination::BudgetExhausted
    } else if arena.all_paid_off() {
        Termination::Completed
    } else {
        Termination::MonthCapReached
    };

    info!(
        customer_id,
        offer_id = %offer.offer_id,
        months,
        termination = termination.as_str(),
        "consolidation simulation finished"
    );

    Some(ConsolidationSimulationResult {
        offer_id: offer.offer_id.clone(),
        months,
        total_interest,
        new_rate_pct: offer.new_rate_pct,
        max_term_months: offer.max_term_months,
        consolidated_amount,
        termination,
    })
}

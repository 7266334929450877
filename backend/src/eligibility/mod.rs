//! Consolidation offer eligibility
//!
//! Deterministic numeric/structural checks first; only offers that pass
//! them and carry non-trivial free-text conditions are sent to the external
//! condition evaluator. The delegate's verdict is authoritative, and any
//! delegate failure is recovered as "not eligible" (fail-closed); an
//! unreachable evaluator can reject offers but never approve them.

pub mod conditions;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::models::{Card, ConsolidationOffer, CustomerCashflow, EligibleOffersResponse, Loan};

pub use conditions::{ConditionError, ConditionEvaluator, StaticConditionEvaluator, StaticVerdict};

/// Compact customer summary forwarded to the condition evaluator.
///
/// The credit score is not used by the numeric checks; it exists for the
/// delegate's benefit only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub credit_score: u32,

    /// Largest delinquency across all loans and cards, days
    pub max_days_past_due: u32,

    pub has_active_delinquency: bool,

    /// Sum of all loan principals and card balances
    pub total_debt: f64,

    /// `total_debt / (12 × monthly income)`, or 0 without income data
    pub debt_to_income_ratio: f64,

    pub total_accounts: usize,

    pub delinquent_accounts: usize,

    /// `delinquent_accounts / total_accounts`, or 0 with no accounts
    pub delinquency_rate: f64,
}

impl CustomerProfile {
    /// Summarize a customer's debts for the condition evaluator.
    pub fn summarize(
        loans: &[Loan],
        cards: &[Card],
        cashflow: Option<&CustomerCashflow>,
        credit_score: u32,
    ) -> Self {
        let loan_dpds = loans.iter().map(Loan::days_past_due);
        let card_dpds = cards.iter().map(Card::days_past_due);
        let max_days_past_due = loan_dpds.chain(card_dpds).max().unwrap_or(0);

        let total_debt: f64 = loans.iter().map(Loan::principal).sum::<f64>()
            + cards.iter().map(Card::balance).sum::<f64>();

        let debt_to_income_ratio = match cashflow {
            Some(cf) if cf.monthly_income_avg() > 0.0 => {
                total_debt / (cf.monthly_income_avg() * 12.0)
            }
            _ => 0.0,
        };

        let total_accounts = loans.len() + cards.len();
        let delinquent_accounts = loans.iter().filter(|l| l.days_past_due() > 0).count()
            + cards.iter().filter(|c| c.days_past_due() > 0).count();
        let delinquency_rate = if total_accounts > 0 {
            delinquent_accounts as f64 / total_accounts as f64
        } else {
            0.0
        };

        Self {
            credit_score,
            max_days_past_due,
            has_active_delinquency: max_days_past_due > 0,
            total_debt,
            debt_to_income_ratio,
            total_accounts,
            delinquent_accounts,
            delinquency_rate,
        }
    }
}

/// Sum of debt the offer would absorb: loan principals whose product type
/// is listed, plus all card balances when the offer covers cards.
pub fn eligible_debt_total(loans: &[Loan], cards: &[Card], offer: &ConsolidationOffer) -> f64 {
    let mut total: f64 = loans
        .iter()
        .filter(|loan| offer.covers_product_type(loan.product_type()))
        .map(Loan::principal)
        .sum();

    if offer.covers_cards() {
        total += cards.iter().map(Card::balance).sum::<f64>();
    }

    total
}

/// Screens offers against a customer's debts.
pub struct EligibilityEvaluator<'a, E: ConditionEvaluator + ?Sized> {
    conditions: &'a E,
}

impl<'a, E: ConditionEvaluator + ?Sized> EligibilityEvaluator<'a, E> {
    pub fn new(conditions: &'a E) -> Self {
        Self { conditions }
    }

    /// Whether one offer is eligible for this customer.
    ///
    /// Numeric checks short-circuit before the delegate is ever consulted;
    /// the delegate runs at most once, only for non-trivial conditions text.
    pub fn is_offer_eligible(
        &self,
        loans: &[Loan],
        cards: &[Card],
        cashflow: Option<&CustomerCashflow>,
        offer: &ConsolidationOffer,
        credit_score: u32,
    ) -> bool {
        if !passes_numeric_checks(loans, cards, offer) {
            return false;
        }

        if !offer.has_review_conditions() {
            return true;
        }

        let profile = CustomerProfile::summarize(loans, cards, cashflow, credit_score);
        match self.conditions.evaluate(&profile, &offer.conditions) {
            Ok(meets_conditions) => {
                info!(
                    offer_id = %offer.offer_id,
                    meets_conditions,
                    "condition evaluator verdict"
                );
                meets_conditions
            }
            Err(err) => {
                // Fail closed: an unreachable delegate never approves
                warn!(offer_id = %offer.offer_id, error = %err, "condition evaluation failed");
                false
            }
        }
    }

    /// Screen every offer and return the survivors sorted ascending by new
    /// rate (customer-favorable ordering).
    pub fn eligible_offers(
        &self,
        customer_id: &str,
        loans: &[Loan],
        cards: &[Card],
        cashflow: Option<&CustomerCashflow>,
        offers: &[ConsolidationOffer],
        credit_score: u32,
    ) -> EligibleOffersResponse {
        let mut eligible: Vec<ConsolidationOffer> = offers
            .iter()
            .filter(|offer| self.is_offer_eligible(loans, cards, cashflow, offer, credit_score))
            .cloned()
            .collect();

        eligible.sort_by(|a, b| a.new_rate_pct.total_cmp(&b.new_rate_pct));

        info!(
            customer_id,
            eligible = eligible.len(),
            evaluated = offers.len(),
            "offer eligibility screening complete"
        );

        EligibleOffersResponse {
            customer_id: customer_id.to_string(),
            credit_score,
            eligible_offers: eligible,
            total_offers_evaluated: offers.len(),
        }
    }
}

/// Deterministic offer checks, in order, all required:
///
/// 1. there must be eligible debt to consolidate;
/// 2. the eligible debt must fit under the offer's balance ceiling;
/// 3. the offer's term must cover the longest remaining loan term (cards
///    carry no term and are excluded; no loans at all passes).
fn passes_numeric_checks(loans: &[Loan], cards: &[Card], offer: &ConsolidationOffer) -> bool {
    let eligible_debt = eligible_debt_total(loans, cards, offer);

    if eligible_debt <= 0.0 {
        info!(offer_id = %offer.offer_id, "no eligible debt to consolidate");
        return false;
    }

    if eligible_debt > offer.max_consolidated_balance {
        info!(
            offer_id = %offer.offer_id,
            eligible_debt,
            max_consolidated_balance = offer.max_consolidated_balance,
            "eligible debt exceeds offer ceiling"
        );
        return false;
    }

    if let Some(longest_term) = loans.iter().map(Loan::remaining_term_months).max() {
        if offer.max_term_months < longest_term {
            info!(
                offer_id = %offer.offer_id,
                longest_term,
                max_term_months = offer.max_term_months,
                "offer term shorter than longest loan term"
            );
            return false;
        }
    }

    true
}

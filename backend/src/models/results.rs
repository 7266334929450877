//! Simulation and analysis result types
//!
//! Outputs of the simulators and the orchestrator. Immutable once produced;
//! all of them serialize to JSON for the API and report layers.

use serde::{Deserialize, Serialize};

use crate::models::offer::ConsolidationOffer;

/// Why a payoff simulation stopped.
///
/// Minimum and avalanche simulations only ever complete or hit the month
/// cap. The consolidation simulation can additionally stop because the
/// monthly budget no longer covers that month's required minimums; months
/// and interest reported under `BudgetExhausted` cover only the simulated
/// prefix, not a full payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Every balance reached zero (within the residue threshold)
    Completed,

    /// The 1000-month safety cap stopped a non-converging schedule
    MonthCapReached,

    /// Required minimums exceeded the monthly budget (consolidation only)
    BudgetExhausted,
}

impl Termination {
    pub fn as_str(&self) -> &'static str {
        match self {
            Termination::Completed => "completed",
            Termination::MonthCapReached => "month_cap_reached",
            Termination::BudgetExhausted => "budget_exhausted",
        }
    }
}

/// Outcome of a minimum-payment or avalanche payoff simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentSimulationResult {
    /// Months simulated until payoff (or until the run stopped)
    pub months: u32,

    /// Interest accrued across all instruments over those months
    pub total_interest: f64,

    /// Why the simulation stopped
    pub termination: Termination,
}

/// Outcome of a consolidation merge-and-resimulate run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationSimulationResult {
    /// Offer the simulation was run against (lowest eligible rate)
    pub offer_id: String,

    /// Months simulated until payoff (or until the run stopped)
    pub months: u32,

    /// Interest accrued over those months
    pub total_interest: f64,

    /// Rate of the synthetic consolidated loan, percent
    pub new_rate_pct: f64,

    /// Term of the synthetic consolidated loan, months
    pub max_term_months: u32,

    /// Principal actually merged (never above the offer's ceiling)
    pub consolidated_amount: f64,

    /// Why the simulation stopped
    pub termination: Termination,
}

/// Interest and time deltas between two strategies.
///
/// Positive values mean the candidate strategy beats the baseline; both
/// fields can go negative when it does not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsComparison {
    pub interest_saved: f64,
    pub months_saved: i64,
}

impl SavingsComparison {
    /// Savings of `candidate` relative to `baseline`, as `(months, interest)`
    /// pairs.
    pub fn between(baseline: (u32, f64), candidate: (u32, f64)) -> Self {
        Self {
            interest_saved: baseline.1 - candidate.1,
            months_saved: i64::from(baseline.0) - i64::from(candidate.0),
        }
    }
}

/// Consolidation savings against both payoff strategies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsolidationSavings {
    pub vs_minimum: SavingsComparison,
    pub vs_optimized: SavingsComparison,
}

/// Offers that survived eligibility screening, customer-favorable order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibleOffersResponse {
    pub customer_id: String,

    /// Score forwarded to the condition evaluator during screening
    pub credit_score: u32,

    /// Surviving offers, ascending by `new_rate_pct`
    pub eligible_offers: Vec<ConsolidationOffer>,

    pub total_offers_evaluated: usize,
}

/// Comprehensive debt analysis assembled by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtAnalysisResult {
    pub customer_id: String,

    /// Latest entry of the customer's score history
    pub current_credit_score: u32,

    pub minimum_payment_strategy: PaymentSimulationResult,

    pub optimized_payment_strategy: PaymentSimulationResult,

    /// Optimized (avalanche) strategy relative to minimum payments
    pub savings_vs_minimum: SavingsComparison,

    /// Present when offers were supplied and one produced a simulation
    pub consolidation_option: Option<ConsolidationSimulationResult>,

    /// Present exactly when `consolidation_option` is
    pub consolidation_savings: Option<ConsolidationSavings>,

    /// Human-readable explanation when consolidation was requested but
    /// produced no result
    pub consolidation_message: Option<String>,
}

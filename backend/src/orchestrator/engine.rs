//! Debt analysis orchestration
//!
//! Runs the payoff simulators against one customer snapshot and assembles
//! the comparative result: minimum strategy, avalanche strategy, savings
//! deltas, and (when offers are supplied) the consolidation option.
//!
//! The orchestrator owns all precondition checks (customer exists, cashflow
//! present, score history present); the simulators themselves never fail.

use thiserror::Error;
use tracing::info;

use crate::eligibility::{ConditionEvaluator, EligibilityEvaluator};
use crate::models::{
    ConsolidationOffer, ConsolidationSavings, ConsolidationSimulationResult, DebtAnalysisResult,
    EligibleOffersResponse, PaymentSimulationResult, SavingsComparison,
};
use crate::simulation::{
    simulate_avalanche_payments, simulate_consolidation, simulate_minimum_payments,
};
use crate::store::{CustomerData, CustomerDataProvider, StoreError};

/// Message attached when consolidation was requested but no offer survived.
pub const NO_ELIGIBLE_OFFERS_MESSAGE: &str = "No eligible consolidation offers available";

/// Errors raised while orchestrating an analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no cashflow data found for customer {customer_id}")]
    MissingCashflow { customer_id: String },

    #[error("no credit score history found for customer {customer_id}")]
    MissingCreditScoreHistory { customer_id: String },
}

/// Runs simulations and assembles debt analyses for customers served by a
/// data provider.
///
/// # Example
/// ```
/// use debt_analyzer_core_rs::eligibility::StaticConditionEvaluator;
/// use debt_analyzer_core_rs::models::{CreditScore, CustomerCashflow, Loan};
/// use debt_analyzer_core_rs::orchestrator::DebtAnalyzer;
/// use debt_analyzer_core_rs::store::InMemoryStore;
///
/// let mut store = InMemoryStore::new();
/// store.add_loan(Loan::new("C-001", "personal", 18_000.0, 28.5, 36));
/// store.set_cashflow(CustomerCashflow::new("C-001", 3_500.0, 1_800.0, 10.0));
/// store.add_credit_score(CreditScore::new("C-001", "2026-01-15", 645));
///
/// let analyzer = DebtAnalyzer::new(store, StaticConditionEvaluator::approving());
/// let analysis = analyzer.analyze_customer_debt("C-001", &[], true).unwrap();
/// assert!(analysis.savings_vs_minimum.interest_saved >= 0.0);
/// ```
pub struct DebtAnalyzer<S, E> {
    store: S,
    conditions: E,
}

impl<S: CustomerDataProvider, E: ConditionEvaluator> DebtAnalyzer<S, E> {
    pub fn new(store: S, conditions: E) -> Self {
        Self { store, conditions }
    }

    /// Comprehensive analysis: both payoff strategies, savings deltas, and
    /// the consolidation option when offers are supplied.
    pub fn analyze_customer_debt(
        &self,
        customer_id: &str,
        consolidation_offers: &[ConsolidationOffer],
        cure_past_due_first: bool,
    ) -> Result<DebtAnalysisResult, AnalysisError> {
        let data = self.store.customer_data(customer_id)?;

        let current_credit_score = latest_score(&data, customer_id)?;
        let cashflow = required_cashflow(&data, customer_id)?;

        let minimum = simulate_minimum_payments(&data.loans, &data.cards);
        let optimized =
            simulate_avalanche_payments(&data.loans, &data.cards, cashflow, cure_past_due_first);

        let savings_vs_minimum = SavingsComparison::between(
            (minimum.months, minimum.total_interest),
            (optimized.months, optimized.total_interest),
        );

        let mut analysis = DebtAnalysisResult {
            customer_id: customer_id.to_string(),
            current_credit_score,
            minimum_payment_strategy: minimum,
            optimized_payment_strategy: optimized,
            savings_vs_minimum,
            consolidation_option: None,
            consolidation_savings: None,
            consolidation_message: None,
        };

        if !consolidation_offers.is_empty() {
            let consolidation = simulate_consolidation(
                customer_id,
                &data.loans,
                &data.cards,
                cashflow,
                consolidation_offers,
                current_credit_score,
                &self.conditions,
            );

            match consolidation {
                Some(result) => {
                    analysis.consolidation_savings = Some(ConsolidationSavings {
                        vs_minimum: SavingsComparison::between(
                            (minimum.months, minimum.total_interest),
                            (result.months, result.total_interest),
                        ),
                        vs_optimized: SavingsComparison::between(
                            (optimized.months, optimized.total_interest),
                            (result.months, result.total_interest),
                        ),
                    });
                    analysis.consolidation_option = Some(result);
                }
                None => {
                    analysis.consolidation_message = Some(NO_ELIGIBLE_OFFERS_MESSAGE.to_string());
                }
            }
        }

        info!(customer_id, "debt analysis assembled");
        Ok(analysis)
    }

    /// Minimum-payment simulation for one customer.
    pub fn simulate_minimum(
        &self,
        customer_id: &str,
    ) -> Result<PaymentSimulationResult, AnalysisError> {
        let data = self.store.customer_data(customer_id)?;
        Ok(simulate_minimum_payments(&data.loans, &data.cards))
    }

    /// Avalanche simulation for one customer.
    pub fn simulate_optimized(
        &self,
        customer_id: &str,
        cure_past_due_first: bool,
    ) -> Result<PaymentSimulationResult, AnalysisError> {
        let data = self.store.customer_data(customer_id)?;
        let cashflow = required_cashflow(&data, customer_id)?;
        Ok(simulate_avalanche_payments(
            &data.loans,
            &data.cards,
            cashflow,
            cure_past_due_first,
        ))
    }

    /// Offer screening for one customer at an explicit score.
    pub fn eligible_offers(
        &self,
        customer_id: &str,
        offers: &[ConsolidationOffer],
        credit_score: u32,
    ) -> Result<EligibleOffersResponse, AnalysisError> {
        let data = self.store.customer_data(customer_id)?;
        Ok(EligibilityEvaluator::new(&self.conditions).eligible_offers(
            customer_id,
            &data.loans,
            &data.cards,
            data.cashflow.as_ref(),
            offers,
            credit_score,
        ))
    }

    /// Consolidation simulation for one customer at an explicit score.
    pub fn simulate_consolidation(
        &self,
        customer_id: &str,
        offers: &[ConsolidationOffer],
        credit_score: u32,
    ) -> Result<Option<ConsolidationSimulationResult>, AnalysisError> {
        let data = self.store.customer_data(customer_id)?;
        let cashflow = required_cashflow(&data, customer_id)?;
        Ok(simulate_consolidation(
            customer_id,
            &data.loans,
            &data.cards,
            cashflow,
            offers,
            credit_score,
            &self.conditions,
        ))
    }
}

fn latest_score(data: &CustomerData, customer_id: &str) -> Result<u32, AnalysisError> {
    data.credit_scores
        .last()
        .map(|score| score.score())
        .ok_or_else(|| AnalysisError::MissingCreditScoreHistory {
            customer_id: customer_id.to_string(),
        })
}

fn required_cashflow<'a>(
    data: &'a CustomerData,
    customer_id: &str,
) -> Result<&'a crate::models::CustomerCashflow, AnalysisError> {
    data.cashflow
        .as_ref()
        .ok_or_else(|| AnalysisError::MissingCashflow {
            customer_id: customer_id.to_string(),
        })
}

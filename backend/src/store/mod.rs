//! Customer data provider boundary
//!
//! The engine consumes customer records through [`CustomerDataProvider`];
//! the real book of record lives behind the excluded API layer. The
//! in-memory implementation here backs tests and the FFI host.
//!
//! Providers hand out owned snapshots: simulations mutate their own working
//! copies and can never alias store state.

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{Card, CreditScore, CustomerCashflow, Loan};

/// Errors raised by customer data lookups
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("customer {customer_id} not found")]
    CustomerNotFound { customer_id: String },
}

/// Everything the engine needs to know about one customer.
///
/// `credit_scores` is time-ordered, oldest first; the last entry is the
/// current score. `cashflow` is optional; its absence is a fatal
/// precondition for the budget-constrained simulators, surfaced by the
/// orchestrator.
#[derive(Debug, Clone, Default)]
pub struct CustomerData {
    pub loans: Vec<Loan>,
    pub cards: Vec<Card>,
    pub cashflow: Option<CustomerCashflow>,
    pub credit_scores: Vec<CreditScore>,
}

/// Source of customer snapshots.
pub trait CustomerDataProvider {
    /// Fetch an owned snapshot of the customer's records.
    fn customer_data(&self, customer_id: &str) -> Result<CustomerData, StoreError>;
}

impl<P: CustomerDataProvider + ?Sized> CustomerDataProvider for &P {
    fn customer_data(&self, customer_id: &str) -> Result<CustomerData, StoreError> {
        (**self).customer_data(customer_id)
    }
}

/// In-memory customer store (mock book of record).
///
/// # Example
/// ```
/// use debt_analyzer_core_rs::models::{CreditScore, Loan};
/// use debt_analyzer_core_rs::store::{CustomerDataProvider, InMemoryStore};
///
/// let mut store = InMemoryStore::new();
/// store.add_loan(Loan::new("C-001", "personal", 18_000.0, 28.5, 36));
/// store.add_credit_score(CreditScore::new("C-001", "2026-01-15", 645));
///
/// let data = store.customer_data("C-001").unwrap();
/// assert_eq!(data.loans.len(), 1);
/// assert!(store.customer_data("C-404").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    customers: HashMap<String, CustomerData>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer with no records yet. Adding any record registers
    /// its customer implicitly, so this is only needed for empty customers.
    pub fn register_customer(&mut self, customer_id: impl Into<String>) {
        self.customers.entry(customer_id.into()).or_default();
    }

    pub fn add_loan(&mut self, loan: Loan) {
        self.bucket(loan.customer_id()).loans.push(loan);
    }

    pub fn add_card(&mut self, card: Card) {
        self.bucket(card.customer_id()).cards.push(card);
    }

    /// Set or replace the customer's cashflow record.
    pub fn set_cashflow(&mut self, cashflow: CustomerCashflow) {
        let customer_id = cashflow.customer_id().to_string();
        self.bucket(&customer_id).cashflow = Some(cashflow);
    }

    /// Append a score observation. Callers append in chronological order;
    /// the last entry is treated as current.
    pub fn add_credit_score(&mut self, score: CreditScore) {
        self.bucket(score.customer_id()).credit_scores.push(score);
    }

    fn bucket(&mut self, customer_id: &str) -> &mut CustomerData {
        self.customers.entry(customer_id.to_string()).or_default()
    }
}

impl CustomerDataProvider for InMemoryStore {
    fn customer_data(&self, customer_id: &str) -> Result<CustomerData, StoreError> {
        self.customers
            .get(customer_id)
            .cloned()
            .ok_or_else(|| StoreError::CustomerNotFound {
                customer_id: customer_id.to_string(),
            })
    }
}

//! Loan record
//!
//! An installment debt with a fixed annual rate and a remaining term.
//! Canonical records are immutable once stored; the simulators work on
//! per-call copies (see `simulation::instrument`) and never mutate these.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An installment loan held by a customer.
///
/// # Example
/// ```
/// use debt_analyzer_core_rs::models::Loan;
///
/// let loan = Loan::new("C-001", "personal", 18_000.0, 28.5, 36)
///     .with_days_past_due(15);
/// assert_eq!(loan.customer_id(), "C-001");
/// assert_eq!(loan.remaining_term_months(), 36);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique loan identifier (UUID unless supplied)
    loan_id: String,

    /// Owning customer
    customer_id: String,

    /// Product type tag (e.g. "personal", "auto", "consolidation");
    /// matched against `ConsolidationOffer::product_types_eligible`
    product_type: String,

    /// Outstanding principal (currency units, >= 0)
    principal: f64,

    /// Fixed annual interest rate, percent (0-100)
    annual_rate_pct: f64,

    /// Remaining term in whole months
    remaining_term_months: u32,

    /// Whether the loan is secured by collateral
    collateral: bool,

    /// Current delinquency in days (0 = current)
    days_past_due: u32,
}

impl Loan {
    /// Create a loan with a generated id, no collateral, and no delinquency.
    pub fn new(
        customer_id: impl Into<String>,
        product_type: impl Into<String>,
        principal: f64,
        annual_rate_pct: f64,
        remaining_term_months: u32,
    ) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            customer_id: customer_id.into(),
            product_type: product_type.into(),
            principal,
            annual_rate_pct,
            remaining_term_months,
            collateral: false,
            days_past_due: 0,
        }
    }

    /// Replace the generated id (ids coming from the upstream book of record).
    pub fn with_id(mut self, loan_id: impl Into<String>) -> Self {
        self.loan_id = loan_id.into();
        self
    }

    pub fn with_collateral(mut self, collateral: bool) -> Self {
        self.collateral = collateral;
        self
    }

    pub fn with_days_past_due(mut self, days_past_due: u32) -> Self {
        self.days_past_due = days_past_due;
        self
    }

    pub fn loan_id(&self) -> &str {
        &self.loan_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_pct(&self) -> f64 {
        self.annual_rate_pct
    }

    pub fn remaining_term_months(&self) -> u32 {
        self.remaining_term_months
    }

    pub fn collateral(&self) -> bool {
        self.collateral
    }

    pub fn days_past_due(&self) -> u32 {
        self.days_past_due
    }
}

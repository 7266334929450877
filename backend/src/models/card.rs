//! Credit card record
//!
//! A revolving balance with a percentage-based minimum payment. Cards have
//! no fixed term; they participate in consolidation under the reserved
//! product type [`CARD_PRODUCT_TYPE`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product type tag under which card balances are matched against
/// consolidation offers.
pub const CARD_PRODUCT_TYPE: &str = "card";

/// A revolving credit card balance held by a customer.
///
/// # Example
/// ```
/// use debt_analyzer_core_rs::models::Card;
///
/// let card = Card::new("C-001", 3_500.0, 45.0, 5.0);
/// assert_eq!(card.balance(), 3_500.0);
/// assert_eq!(card.min_payment_pct(), 5.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique card identifier (UUID unless supplied)
    card_id: String,

    /// Owning customer
    customer_id: String,

    /// Current revolving balance (currency units, >= 0)
    balance: f64,

    /// Fixed annual interest rate, percent (0-100)
    annual_rate_pct: f64,

    /// Minimum payment as a percent of balance (0-100)
    min_payment_pct: f64,

    /// Statement due day of month (1-31); carried on the record for the
    /// reporting layers, not used by the simulators
    payment_due_day: u32,

    /// Current delinquency in days (0 = current)
    days_past_due: u32,
}

impl Card {
    /// Create a card with a generated id, due day 1, and no delinquency.
    pub fn new(
        customer_id: impl Into<String>,
        balance: f64,
        annual_rate_pct: f64,
        min_payment_pct: f64,
    ) -> Self {
        Self {
            card_id: Uuid::new_v4().to_string(),
            customer_id: customer_id.into(),
            balance,
            annual_rate_pct,
            min_payment_pct,
            payment_due_day: 1,
            days_past_due: 0,
        }
    }

    /// Replace the generated id (ids coming from the upstream book of record).
    pub fn with_id(mut self, card_id: impl Into<String>) -> Self {
        self.card_id = card_id.into();
        self
    }

    pub fn with_payment_due_day(mut self, payment_due_day: u32) -> Self {
        self.payment_due_day = payment_due_day;
        self
    }

    pub fn with_days_past_due(mut self, days_past_due: u32) -> Self {
        self.days_past_due = days_past_due;
        self
    }

    pub fn card_id(&self) -> &str {
        &self.card_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn annual_rate_pct(&self) -> f64 {
        self.annual_rate_pct
    }

    pub fn min_payment_pct(&self) -> f64 {
        self.min_payment_pct
    }

    pub fn payment_due_day(&self) -> u32 {
        self.payment_due_day
    }

    pub fn days_past_due(&self) -> u32 {
        self.days_past_due
    }
}

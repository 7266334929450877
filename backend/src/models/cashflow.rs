//! Customer cashflow record
//!
//! Income and essential-expense averages used to derive a fixed monthly
//! debt-service budget. Read-only input: each simulation computes its budget
//! once from this record and never writes back.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Averaged monthly cashflow figures for a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCashflow {
    /// Unique record identifier (UUID unless supplied)
    cashflow_id: String,

    /// Owning customer
    customer_id: String,

    /// Average monthly gross income
    monthly_income_avg: f64,

    /// Average monthly essential expenses (housing, utilities, food, ...)
    essential_expenses_avg: f64,

    /// Month-to-month income variability, percent of income (0-100).
    /// This fraction of income is held back as a buffer and never budgeted.
    income_variability_pct: f64,
}

impl CustomerCashflow {
    pub fn new(
        customer_id: impl Into<String>,
        monthly_income_avg: f64,
        essential_expenses_avg: f64,
        income_variability_pct: f64,
    ) -> Self {
        Self {
            cashflow_id: Uuid::new_v4().to_string(),
            customer_id: customer_id.into(),
            monthly_income_avg,
            essential_expenses_avg,
            income_variability_pct,
        }
    }

    /// Replace the generated id (ids coming from the upstream book of record).
    pub fn with_id(mut self, cashflow_id: impl Into<String>) -> Self {
        self.cashflow_id = cashflow_id.into();
        self
    }

    pub fn cashflow_id(&self) -> &str {
        &self.cashflow_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn monthly_income_avg(&self) -> f64 {
        self.monthly_income_avg
    }

    pub fn essential_expenses_avg(&self) -> f64 {
        self.essential_expenses_avg
    }

    pub fn income_variability_pct(&self) -> f64 {
        self.income_variability_pct
    }

    /// Monthly amount available for debt service:
    /// `max(0, income − essential − income × variability/100)`.
    ///
    /// The variability fraction of income is an at-risk buffer that is held
    /// back every month, never spent.
    pub fn monthly_budget(&self) -> f64 {
        let buffer = self.monthly_income_avg * self.income_variability_pct / 100.0;
        (self.monthly_income_avg - self.essential_expenses_avg - buffer).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_holds_back_variability_buffer() {
        let cashflow = CustomerCashflow::new("C-001", 3_500.0, 1_800.0, 10.0);
        assert!((cashflow.monthly_budget() - 1_350.0).abs() < 1e-9);
    }

    #[test]
    fn budget_never_negative() {
        let cashflow = CustomerCashflow::new("C-001", 1_000.0, 2_000.0, 0.0);
        assert_eq!(cashflow.monthly_budget(), 0.0);
    }
}

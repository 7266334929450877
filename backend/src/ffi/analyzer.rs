//! PyO3 wrapper for the debt analyzer
//!
//! This module provides the Python interface to the Rust engine: an
//! in-memory store fed from dicts, an optional Python callable acting as
//! the condition evaluator, and analysis entry points returning dicts.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::eligibility::{ConditionError, ConditionEvaluator, CustomerProfile};
use crate::orchestrator::{AnalysisError, DebtAnalyzer};
use crate::store::InMemoryStore;

use super::types::{
    analysis_result_to_py, consolidation_result_to_py, customer_profile_to_py,
    eligible_offers_to_py, parse_card, parse_cashflow, parse_credit_score, parse_loan,
    parse_offers, payment_result_to_py,
};

/// Condition evaluator backed by a Python callable.
///
/// The callable receives `(profile: dict, conditions: str)` and must return
/// a bool. Any exception, and the absence of a configured callable, is a
/// `ConditionError`, which the eligibility evaluator treats as "not
/// eligible" (fail-closed).
struct PyConditionEvaluator<'a> {
    callback: Option<&'a Py<PyAny>>,
}

impl ConditionEvaluator for PyConditionEvaluator<'_> {
    fn evaluate(&self, profile: &CustomerProfile, conditions: &str) -> Result<bool, ConditionError> {
        let Some(callback) = self.callback else {
            return Err(ConditionError::Unavailable(
                "no condition evaluator configured".to_string(),
            ));
        };

        Python::with_gil(|py| {
            let profile_dict = customer_profile_to_py(py, profile)
                .map_err(|e| ConditionError::EvaluationFailed(e.to_string()))?;
            callback
                .bind(py)
                .call1((profile_dict, conditions))
                .and_then(|verdict| verdict.extract::<bool>())
                .map_err(|e| ConditionError::EvaluationFailed(e.to_string()))
        })
    }
}

fn analysis_error_to_py(err: AnalysisError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python wrapper for the Rust debt analysis engine.
///
/// # Example (from Python)
///
/// ```python
/// from debt_analyzer_core_rs import DebtAnalyzer
///
/// analyzer = DebtAnalyzer()
/// analyzer.add_loan({
///     "customer_id": "C-001",
///     "product_type": "personal",
///     "principal": 18_000.0,
///     "annual_rate_pct": 28.5,
///     "remaining_term_months": 36,
/// })
/// analyzer.set_cashflow({
///     "customer_id": "C-001",
///     "monthly_income_avg": 3_500.0,
///     "essential_expenses_avg": 1_800.0,
///     "income_variability_pct": 10.0,
/// })
/// analyzer.add_credit_score({
///     "customer_id": "C-001", "observed_on": "2026-01-15", "score": 645,
/// })
///
/// analysis = analyzer.analyze_customer_debt("C-001", [])
/// print(analysis["savings_vs_minimum"]["interest_saved"])
/// ```
#[pyclass(name = "DebtAnalyzer")]
pub struct PyDebtAnalyzer {
    store: InMemoryStore,
    condition_callback: Option<Py<PyAny>>,
}

#[pymethods]
impl PyDebtAnalyzer {
    #[new]
    fn new() -> Self {
        Self {
            store: InMemoryStore::new(),
            condition_callback: None,
        }
    }

    /// Install the condition evaluator callable.
    ///
    /// Called as `callback(profile: dict, conditions: str) -> bool` for
    /// each offer with non-trivial conditions. Exceptions are fail-closed.
    fn set_condition_evaluator(&mut self, callback: Py<PyAny>) {
        self.condition_callback = Some(callback);
    }

    /// Register a customer that has no records yet.
    fn register_customer(&mut self, customer_id: &str) {
        self.store.register_customer(customer_id);
    }

    /// Add a loan record. Returns the loan id.
    fn add_loan(&mut self, loan: &Bound<'_, PyDict>) -> PyResult<String> {
        let loan = parse_loan(loan)?;
        let loan_id = loan.loan_id().to_string();
        self.store.add_loan(loan);
        Ok(loan_id)
    }

    /// Add a card record. Returns the card id.
    fn add_card(&mut self, card: &Bound<'_, PyDict>) -> PyResult<String> {
        let card = parse_card(card)?;
        let card_id = card.card_id().to_string();
        self.store.add_card(card);
        Ok(card_id)
    }

    /// Set or replace a customer's cashflow record.
    fn set_cashflow(&mut self, cashflow: &Bound<'_, PyDict>) -> PyResult<()> {
        self.store.set_cashflow(parse_cashflow(cashflow)?);
        Ok(())
    }

    /// Append a credit score observation (chronological order).
    fn add_credit_score(&mut self, score: &Bound<'_, PyDict>) -> PyResult<()> {
        self.store.add_credit_score(parse_credit_score(score)?);
        Ok(())
    }

    /// Comprehensive analysis; see the engine docs for the result shape.
    ///
    /// Raises ValueError when the customer, cashflow record, or credit
    /// score history is missing.
    #[pyo3(signature = (customer_id, consolidation_offers, cure_past_due_first = true))]
    fn analyze_customer_debt(
        &self,
        py: Python,
        customer_id: &str,
        consolidation_offers: &Bound<'_, PyList>,
        cure_past_due_first: bool,
    ) -> PyResult<Py<PyDict>> {
        let offers = parse_offers(consolidation_offers)?;
        let analysis = self
            .analyzer()
            .analyze_customer_debt(customer_id, &offers, cure_past_due_first)
            .map_err(analysis_error_to_py)?;
        analysis_result_to_py(py, &analysis)
    }

    /// Minimum-payment simulation for one customer.
    fn simulate_minimum_payments(&self, py: Python, customer_id: &str) -> PyResult<Py<PyDict>> {
        let result = self
            .analyzer()
            .simulate_minimum(customer_id)
            .map_err(analysis_error_to_py)?;
        payment_result_to_py(py, &result)
    }

    /// Avalanche simulation for one customer.
    #[pyo3(signature = (customer_id, cure_past_due_first = true))]
    fn simulate_optimized_payments(
        &self,
        py: Python,
        customer_id: &str,
        cure_past_due_first: bool,
    ) -> PyResult<Py<PyDict>> {
        let result = self
            .analyzer()
            .simulate_optimized(customer_id, cure_past_due_first)
            .map_err(analysis_error_to_py)?;
        payment_result_to_py(py, &result)
    }

    /// Screen offers for one customer at an explicit credit score.
    fn eligible_offers(
        &self,
        py: Python,
        customer_id: &str,
        offers: &Bound<'_, PyList>,
        credit_score: u32,
    ) -> PyResult<Py<PyDict>> {
        let offers = parse_offers(offers)?;
        let response = self
            .analyzer()
            .eligible_offers(customer_id, &offers, credit_score)
            .map_err(analysis_error_to_py)?;
        eligible_offers_to_py(py, &response)
    }

    /// Consolidation simulation; returns None when no offer is eligible.
    fn simulate_consolidation(
        &self,
        py: Python,
        customer_id: &str,
        offers: &Bound<'_, PyList>,
        credit_score: u32,
    ) -> PyResult<Py<PyAny>> {
        let offers = parse_offers(offers)?;
        let result = self
            .analyzer()
            .simulate_consolidation(customer_id, &offers, credit_score)
            .map_err(analysis_error_to_py)?;

        match result {
            Some(result) => Ok(consolidation_result_to_py(py, &result)?.into_any()),
            None => Ok(py.None()),
        }
    }
}

impl PyDebtAnalyzer {
    fn analyzer(&self) -> DebtAnalyzer<&InMemoryStore, PyConditionEvaluator<'_>> {
        DebtAnalyzer::new(
            &self.store,
            PyConditionEvaluator {
                callback: self.condition_callback.as_ref(),
            },
        )
    }
}

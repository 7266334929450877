//! Type conversion utilities for the FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList).
//! Record parsing validates here so the engine itself can assume clean
//! inputs; violations raise `ValueError` on the Python side.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::eligibility::CustomerProfile;
use crate::models::{
    Card, ConsolidationOffer, ConsolidationSimulationResult, CreditScore, CustomerCashflow,
    DebtAnalysisResult, EligibleOffersResponse, Loan, PaymentSimulationResult, SavingsComparison,
};

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract a required field from a Python dict with a clear error message.
fn extract_required<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    dict.get_item(key)?
        .ok_or_else(|| PyValueError::new_err(format!("Missing required field '{}'", key)))?
        .extract()
}

/// Extract an optional field from a Python dict.
fn extract_optional<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<Option<T>> {
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => Ok(Some(value.extract()?)),
        _ => Ok(None),
    }
}

/// Extract a field with a default value if missing.
fn extract_with_default<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
    default: T,
) -> PyResult<T> {
    Ok(extract_optional(dict, key)?.unwrap_or(default))
}

fn ensure_non_negative(value: f64, field: &str) -> PyResult<()> {
    if value < 0.0 {
        return Err(PyValueError::new_err(format!(
            "Field '{}' must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

fn ensure_percent(value: f64, field: &str) -> PyResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(PyValueError::new_err(format!(
            "Field '{}' must be between 0 and 100, got {}",
            field, value
        )));
    }
    Ok(())
}

// ========================================================================
// Record Parsers
// ========================================================================

/// Convert a Python dict to a Loan record.
pub fn parse_loan(dict: &Bound<'_, PyDict>) -> PyResult<Loan> {
    let customer_id: String = extract_required(dict, "customer_id")?;
    let product_type: String = extract_required(dict, "product_type")?;
    let principal: f64 = extract_required(dict, "principal")?;
    let annual_rate_pct: f64 = extract_required(dict, "annual_rate_pct")?;
    let remaining_term_months: u32 = extract_required(dict, "remaining_term_months")?;

    ensure_non_negative(principal, "principal")?;
    ensure_percent(annual_rate_pct, "annual_rate_pct")?;

    let mut loan = Loan::new(
        customer_id,
        product_type,
        principal,
        annual_rate_pct,
        remaining_term_months,
    )
    .with_collateral(extract_with_default(dict, "collateral", false)?)
    .with_days_past_due(extract_with_default(dict, "days_past_due", 0u32)?);

    if let Some(loan_id) = extract_optional::<String>(dict, "loan_id")? {
        loan = loan.with_id(loan_id);
    }
    Ok(loan)
}

/// Convert a Python dict to a Card record.
pub fn parse_card(dict: &Bound<'_, PyDict>) -> PyResult<Card> {
    let customer_id: String = extract_required(dict, "customer_id")?;
    let balance: f64 = extract_required(dict, "balance")?;
    let annual_rate_pct: f64 = extract_required(dict, "annual_rate_pct")?;
    let min_payment_pct: f64 = extract_required(dict, "min_payment_pct")?;

    ensure_non_negative(balance, "balance")?;
    ensure_percent(annual_rate_pct, "annual_rate_pct")?;
    ensure_percent(min_payment_pct, "min_payment_pct")?;

    let payment_due_day: u32 = extract_with_default(dict, "payment_due_day", 1u32)?;
    if !(1..=31).contains(&payment_due_day) {
        return Err(PyValueError::new_err(format!(
            "Field 'payment_due_day' must be between 1 and 31, got {}",
            payment_due_day
        )));
    }

    let mut card = Card::new(customer_id, balance, annual_rate_pct, min_payment_pct)
        .with_payment_due_day(payment_due_day)
        .with_days_past_due(extract_with_default(dict, "days_past_due", 0u32)?);

    if let Some(card_id) = extract_optional::<String>(dict, "card_id")? {
        card = card.with_id(card_id);
    }
    Ok(card)
}

/// Convert a Python dict to a CustomerCashflow record.
pub fn parse_cashflow(dict: &Bound<'_, PyDict>) -> PyResult<CustomerCashflow> {
    let customer_id: String = extract_required(dict, "customer_id")?;
    let monthly_income_avg: f64 = extract_required(dict, "monthly_income_avg")?;
    let essential_expenses_avg: f64 = extract_required(dict, "essential_expenses_avg")?;
    let income_variability_pct: f64 = extract_required(dict, "income_variability_pct")?;

    ensure_non_negative(monthly_income_avg, "monthly_income_avg")?;
    ensure_non_negative(essential_expenses_avg, "essential_expenses_avg")?;
    ensure_percent(income_variability_pct, "income_variability_pct")?;

    let mut cashflow = CustomerCashflow::new(
        customer_id,
        monthly_income_avg,
        essential_expenses_avg,
        income_variability_pct,
    );
    if let Some(cashflow_id) = extract_optional::<String>(dict, "cashflow_id")? {
        cashflow = cashflow.with_id(cashflow_id);
    }
    Ok(cashflow)
}

/// Convert a Python dict to a CreditScore observation.
pub fn parse_credit_score(dict: &Bound<'_, PyDict>) -> PyResult<CreditScore> {
    let customer_id: String = extract_required(dict, "customer_id")?;
    let observed_on: String = extract_required(dict, "observed_on")?;
    let score: u32 = extract_required(dict, "score")?;

    if !(300..=850).contains(&score) {
        return Err(PyValueError::new_err(format!(
            "Field 'score' must be between 300 and 850, got {}",
            score
        )));
    }

    Ok(CreditScore::new(customer_id, observed_on, score))
}

/// Convert a Python dict to a ConsolidationOffer.
pub fn parse_offer(dict: &Bound<'_, PyDict>) -> PyResult<ConsolidationOffer> {
    let new_rate_pct: f64 = extract_required(dict, "new_rate_pct")?;
    let max_consolidated_balance: f64 = extract_required(dict, "max_consolidated_balance")?;

    ensure_percent(new_rate_pct, "new_rate_pct")?;
    ensure_non_negative(max_consolidated_balance, "max_consolidated_balance")?;

    Ok(ConsolidationOffer {
        offer_id: extract_required(dict, "offer_id")?,
        product_types_eligible: extract_required(dict, "product_types_eligible")?,
        new_rate_pct,
        max_term_months: extract_required(dict, "max_term_months")?,
        max_consolidated_balance,
        conditions: extract_with_default(dict, "conditions", String::new())?,
    })
}

/// Parse a Python list of offer dicts.
pub fn parse_offers(list: &Bound<'_, PyList>) -> PyResult<Vec<ConsolidationOffer>> {
    let mut offers = Vec::with_capacity(list.len());
    for item in list.iter() {
        let dict: Bound<'_, PyDict> = item.downcast_into()?;
        offers.push(parse_offer(&dict)?);
    }
    Ok(offers)
}

// ========================================================================
// Result Converters
// ========================================================================

/// Convert a CustomerProfile to a Python dict (condition evaluator input).
pub fn customer_profile_to_py(py: Python, profile: &CustomerProfile) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("credit_score", profile.credit_score)?;
    dict.set_item("max_days_past_due", profile.max_days_past_due)?;
    dict.set_item("has_active_delinquency", profile.has_active_delinquency)?;
    dict.set_item("total_debt", profile.total_debt)?;
    dict.set_item("debt_to_income_ratio", profile.debt_to_income_ratio)?;
    dict.set_item("total_accounts", profile.total_accounts)?;
    dict.set_item("delinquent_accounts", profile.delinquent_accounts)?;
    dict.set_item("delinquency_rate", profile.delinquency_rate)?;
    Ok(dict.unbind())
}

pub fn payment_result_to_py(py: Python, result: &PaymentSimulationResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("months", result.months)?;
    dict.set_item("total_interest", result.total_interest)?;
    dict.set_item("termination", result.termination.as_str())?;
    Ok(dict.unbind())
}

pub fn consolidation_result_to_py(
    py: Python,
    result: &ConsolidationSimulationResult,
) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("offer_id", result.offer_id.as_str())?;
    dict.set_item("months", result.months)?;
    dict.set_item("total_interest", result.total_interest)?;
    dict.set_item("new_rate_pct", result.new_rate_pct)?;
    dict.set_item("max_term_months", result.max_term_months)?;
    dict.set_item("consolidated_amount", result.consolidated_amount)?;
    dict.set_item("termination", result.termination.as_str())?;
    Ok(dict.unbind())
}

fn savings_to_py(py: Python, savings: &SavingsComparison) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("interest_saved", savings.interest_saved)?;
    dict.set_item("months_saved", savings.months_saved)?;
    Ok(dict.unbind())
}

fn offer_to_py(py: Python, offer: &ConsolidationOffer) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("offer_id", offer.offer_id.as_str())?;
    dict.set_item("product_types_eligible", offer.product_types_eligible.clone())?;
    dict.set_item("new_rate_pct", offer.new_rate_pct)?;
    dict.set_item("max_term_months", offer.max_term_months)?;
    dict.set_item("max_consolidated_balance", offer.max_consolidated_balance)?;
    dict.set_item("conditions", offer.conditions.as_str())?;
    Ok(dict.unbind())
}

pub fn eligible_offers_to_py(py: Python, response: &EligibleOffersResponse) -> PyResult<Py<PyDict>> {
    let offers = PyList::empty(py);
    for offer in &response.eligible_offers {
        offers.append(offer_to_py(py, offer)?)?;
    }

    let dict = PyDict::new(py);
    dict.set_item("customer_id", response.customer_id.as_str())?;
    dict.set_item("credit_score", response.credit_score)?;
    dict.set_item("eligible_offers", offers)?;
    dict.set_item("total_offers_evaluated", response.total_offers_evaluated)?;
    Ok(dict.unbind())
}

pub fn analysis_result_to_py(py: Python, analysis: &DebtAnalysisResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("customer_id", analysis.customer_id.as_str())?;
    dict.set_item("current_credit_score", analysis.current_credit_score)?;
    dict.set_item(
        "minimum_payment_strategy",
        payment_result_to_py(py, &analysis.minimum_payment_strategy)?,
    )?;
    dict.set_item(
        "optimized_payment_strategy",
        payment_result_to_py(py, &analysis.optimized_payment_strategy)?,
    )?;
    dict.set_item(
        "savings_vs_minimum",
        savings_to_py(py, &analysis.savings_vs_minimum)?,
    )?;

    match &analysis.consolidation_option {
        Some(option) => dict.set_item(
            "consolidation_option",
            consolidation_result_to_py(py, option)?,
        )?,
        None => dict.set_item("consolidation_option", py.None())?,
    }

    match &analysis.consolidation_savings {
        Some(savings) => {
            let nested = PyDict::new(py);
            nested.set_item("vs_minimum", savings_to_py(py, &savings.vs_minimum)?)?;
            nested.set_item("vs_optimized", savings_to_py(py, &savings.vs_optimized)?)?;
            dict.set_item("consolidation_savings", nested)?;
        }
        None => dict.set_item("consolidation_savings", py.None())?,
    }

    dict.set_item("consolidation_message", analysis.consolidation_message.as_deref())?;
    Ok(dict.unbind())
}

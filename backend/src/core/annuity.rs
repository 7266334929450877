//! Fixed-payment annuity math
//!
//! Computes the level payment that retires a balance over a remaining term.
//! This is the single source of scheduled-payment math for loans; the
//! simulators apply it independently per instrument every month.

/// Compute the current-period payment for a loan.
///
/// Policy, in priority order:
/// 1. `term_months == 0` → the full principal is due now.
/// 2. zero monthly rate → straight-line `principal / term`.
/// 3. otherwise the standard annuity formula
///    `principal · r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate.
///
/// Pure function, no side effects.
///
/// # Example
/// ```
/// use debt_analyzer_core_rs::core::annuity::installment;
///
/// // 12 months at 0% is a straight twelfth per month
/// assert_eq!(installment(12_000.0, 0.0, 12), 1_000.0);
/// ```
pub fn installment(principal: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return principal;
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return principal / f64::from(term_months);
    }

    let growth = (1.0 + monthly_rate).powi(term_months as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_term_is_immediate_payoff() {
        assert_eq!(installment(5_000.0, 24.0, 0), 5_000.0);
    }

    #[test]
    fn zero_rate_is_straight_line() {
        assert_eq!(installment(12_000.0, 0.0, 12), 1_000.0);
    }

    #[test]
    fn positive_rate_exceeds_straight_line() {
        let payment = installment(1_200.0, 12.0, 12);
        assert!(payment > 100.0);
        // Known annuity value for 1200 @ 1%/month over 12 months
        assert!((payment - 106.6186).abs() < 0.01);
    }

    #[test]
    fn higher_rate_means_higher_payment() {
        let low = installment(10_000.0, 5.0, 36);
        let high = installment(10_000.0, 25.0, 36);
        assert!(high > low);
    }
}

//! Tests for the annuity installment function

use debt_analyzer_core_rs::core::annuity::installment;

#[test]
fn test_zero_term_returns_full_principal() {
    assert_eq!(installment(12_000.0, 28.5, 0), 12_000.0);
    assert_eq!(installment(0.0, 28.5, 0), 0.0);
}

#[test]
fn test_zero_rate_is_straight_line() {
    assert_eq!(installment(12_000.0, 0.0, 12), 1_000.0);
    assert_eq!(installment(9_000.0, 0.0, 36), 250.0);
}

#[test]
fn test_standard_annuity_value() {
    // 1200 at 1%/month over 12 months is the textbook 106.62/month
    let payment = installment(1_200.0, 12.0, 12);
    assert!((payment - 106.6186).abs() < 0.01);
}

#[test]
fn test_payment_covers_first_month_interest() {
    // An annuity payment always exceeds the interest accruing in the
    // period, otherwise the balance could never amortize
    for &(principal, rate, term) in &[
        (18_000.0, 28.5, 36u32),
        (3_500.0, 45.0, 24),
        (100_000.0, 3.5, 360),
    ] {
        let payment = installment(principal, rate, term);
        let monthly_interest = principal * rate / 100.0 / 12.0;
        assert!(
            payment > monthly_interest,
            "payment {} must exceed interest {}",
            payment,
            monthly_interest
        );
    }
}

#[test]
fn test_repeated_payment_amortizes_to_zero() {
    // Recomputing the installment from (balance, remaining term) each month
    // must retire the balance exactly at term end
    let mut balance = 18_000.0f64;
    let rate = 28.5;
    let monthly_rate = rate / 100.0 / 12.0;

    for remaining in (1..=36u32).rev() {
        let payment = installment(balance, rate, remaining);
        balance -= payment - balance * monthly_rate;
    }

    assert!(balance.abs() < 1e-6, "residual balance {}", balance);
}

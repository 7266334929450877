//! Tests for the minimum-payment simulator

use debt_analyzer_core_rs::models::{Card, Loan, Termination};
use debt_analyzer_core_rs::simulation::simulate_minimum_payments;

#[test]
fn test_zero_rate_loan_pays_off_in_term_with_no_interest() {
    let loans = vec![Loan::new("C-001", "personal", 12_000.0, 0.0, 12)];

    let result = simulate_minimum_payments(&loans, &[]);

    assert_eq!(result.months, 12);
    assert_eq!(result.total_interest, 0.0);
    assert_eq!(result.termination, Termination::Completed);
}

#[test]
fn test_amortizing_loan_pays_off_in_exactly_its_term() {
    let loans = vec![Loan::new("C-001", "personal", 18_000.0, 28.5, 36)];

    let result = simulate_minimum_payments(&loans, &[]);

    assert_eq!(result.months, 36);
    assert!(result.total_interest > 0.0);
    assert_eq!(result.termination, Termination::Completed);
}

#[test]
fn test_empty_book_is_already_paid_off() {
    let result = simulate_minimum_payments(&[], &[]);

    assert_eq!(result.months, 0);
    assert_eq!(result.total_interest, 0.0);
    assert_eq!(result.termination, Termination::Completed);
}

#[test]
fn test_card_pays_off_under_percentage_minimum() {
    let cards = vec![Card::new("C-001", 3_500.0, 45.0, 5.0)];

    let result = simulate_minimum_payments(&[], &cards);

    assert!(result.months > 0);
    assert!(result.months <= 1000);
    assert!(result.total_interest > 0.0);
    assert_eq!(result.termination, Termination::Completed);
}

#[test]
fn test_crawling_card_hits_the_month_cap() {
    // min_payment_pct 0 leaves only the interest+1 floor: one unit of
    // principal per month, so a 5000 balance cannot clear in 1000 months
    let cards = vec![Card::new("C-001", 5_000.0, 30.0, 0.0)];

    let result = simulate_minimum_payments(&[], &cards);

    assert_eq!(result.months, 1000);
    assert_eq!(result.termination, Termination::MonthCapReached);
}

#[test]
fn test_mixed_book_accrues_interest_from_both_kinds() {
    let loans = vec![Loan::new("C-001", "personal", 10_000.0, 20.0, 24)];
    let cards = vec![Card::new("C-001", 2_000.0, 36.0, 5.0)];

    let loans_only = simulate_minimum_payments(&loans, &[]);
    let combined = simulate_minimum_payments(&loans, &cards);

    assert!(combined.total_interest > loans_only.total_interest);
    assert_eq!(combined.termination, Termination::Completed);
}

#[test]
fn test_canonical_records_are_not_mutated() {
    let loans = vec![Loan::new("C-001", "personal", 18_000.0, 28.5, 36)];
    let cards = vec![Card::new("C-001", 3_500.0, 45.0, 5.0)];

    simulate_minimum_payments(&loans, &cards);

    assert_eq!(loans[0].principal(), 18_000.0);
    assert_eq!(loans[0].remaining_term_months(), 36);
    assert_eq!(cards[0].balance(), 3_500.0);
}

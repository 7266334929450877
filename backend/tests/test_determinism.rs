//! Property tests: determinism, termination bound, avalanche dominance

use proptest::prelude::*;

use debt_analyzer_core_rs::models::{Card, CustomerCashflow, Loan};
use debt_analyzer_core_rs::simulation::{
    simulate_avalanche_payments, simulate_minimum_payments, MONTH_CAP,
};

fn loan_strategy() -> impl Strategy<Value = Loan> {
    (
        0.0..50_000.0f64, // principal
        0.0..60.0f64,     // annual rate pct
        0u32..120,        // remaining term months
        0u32..90,         // days past due
    )
        .prop_map(|(principal, rate, term, dpd)| {
            Loan::new("C-PROP", "personal", principal, rate, term).with_days_past_due(dpd)
        })
}

fn card_strategy() -> impl Strategy<Value = Card> {
    (
        0.0..20_000.0f64, // balance
        0.0..60.0f64,     // annual rate pct
        0.0..10.0f64,     // min payment pct
        0u32..90,         // days past due
    )
        .prop_map(|(balance, rate, min_pct, dpd)| {
            Card::new("C-PROP", balance, rate, min_pct).with_days_past_due(dpd)
        })
}

proptest! {
    #[test]
    fn minimum_simulation_terminates_and_repeats_bit_identically(
        loans in prop::collection::vec(loan_strategy(), 0..4),
        cards in prop::collection::vec(card_strategy(), 0..4),
    ) {
        let first = simulate_minimum_payments(&loans, &cards);
        let second = simulate_minimum_payments(&loans, &cards);

        prop_assert!(first.months <= MONTH_CAP);
        prop_assert!(first.total_interest >= 0.0);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn avalanche_simulation_terminates_and_repeats_bit_identically(
        loans in prop::collection::vec(loan_strategy(), 0..4),
        cards in prop::collection::vec(card_strategy(), 0..4),
        income in 0.0..20_000.0f64,
        essential in 0.0..10_000.0f64,
        variability in 0.0..50.0f64,
    ) {
        let cashflow = CustomerCashflow::new("C-PROP", income, essential, variability);

        let first = simulate_avalanche_payments(&loans, &cards, &cashflow, true);
        let second = simulate_avalanche_payments(&loans, &cards, &cashflow, true);

        prop_assert!(first.months <= MONTH_CAP);
        prop_assert!(first.total_interest >= 0.0);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn avalanche_dominates_minimum_strategy_given_ample_budget(
        loans in prop::collection::vec(loan_strategy(), 0..4),
        cards in prop::collection::vec(card_strategy(), 0..4),
    ) {
        // Budget of twice the total debt covers every month's minimums
        // (a single month's minimum never exceeds payoff, which is bounded
        // by balance plus one month of interest)
        let total_debt: f64 = loans.iter().map(Loan::principal).sum::<f64>()
            + cards.iter().map(Card::balance).sum::<f64>();
        let cashflow =
            CustomerCashflow::new("C-PROP", total_debt * 2.0 + 2_000.0, 1_000.0, 0.0);

        let minimum = simulate_minimum_payments(&loans, &cards);
        let avalanche = simulate_avalanche_payments(&loans, &cards, &cashflow, true);

        prop_assert!(avalanche.months <= minimum.months);
        prop_assert!(avalanche.total_interest <= minimum.total_interest + 1e-6);
    }

    #[test]
    fn zero_rate_books_accrue_no_interest(
        principals in prop::collection::vec(0.0..50_000.0f64, 1..4),
        balances in prop::collection::vec(0.0..20_000.0f64, 1..4),
    ) {
        let loans: Vec<Loan> = principals
            .into_iter()
            .map(|p| Loan::new("C-PROP", "personal", p, 0.0, 24))
            .collect();
        let cards: Vec<Card> = balances
            .into_iter()
            .map(|b| Card::new("C-PROP", b, 0.0, 5.0))
            .collect();

        let result = simulate_minimum_payments(&loans, &cards);

        prop_assert_eq!(result.total_interest, 0.0);
        prop_assert!(result.months <= MONTH_CAP);
    }
}

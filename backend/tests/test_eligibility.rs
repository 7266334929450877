//! Tests for consolidation offer eligibility screening

use debt_analyzer_core_rs::eligibility::{
    CustomerProfile, EligibilityEvaluator, StaticConditionEvaluator,
};
use debt_analyzer_core_rs::models::{Card, ConsolidationOffer, CustomerCashflow, Loan};

fn offer(
    id: &str,
    types: &[&str],
    rate: f64,
    max_term: u32,
    max_balance: f64,
    conditions: &str,
) -> ConsolidationOffer {
    ConsolidationOffer {
        offer_id: id.to_string(),
        product_types_eligible: types.iter().map(|t| t.to_string()).collect(),
        new_rate_pct: rate,
        max_term_months: max_term,
        max_consolidated_balance: max_balance,
        conditions: conditions.to_string(),
    }
}

#[test]
fn test_balance_cap_rejects_without_consulting_the_delegate() {
    // Eligible debt 18000 exceeds the 10000 ceiling; the delegate must not
    // be consulted even though the offer carries real conditions
    let loans = vec![Loan::new("C-001", "personal", 18_000.0, 28.5, 36).with_id("L-101")];
    let conditions = StaticConditionEvaluator::approving();
    let evaluator = EligibilityEvaluator::new(&conditions);

    let offer = offer(
        "OFF-1",
        &["personal"],
        15.0,
        48,
        10_000.0,
        "Requires stable employment",
    );
    let eligible = evaluator.is_offer_eligible(&loans, &[], None, &offer, 700);

    assert!(!eligible);
    assert_eq!(conditions.calls(), 0);
}

#[test]
fn test_no_matching_debt_is_not_eligible() {
    let loans = vec![Loan::new("C-001", "personal", 18_000.0, 28.5, 36)];
    let conditions = StaticConditionEvaluator::approving();
    let evaluator = EligibilityEvaluator::new(&conditions);

    let offer = offer("OFF-1", &["auto"], 15.0, 48, 50_000.0, "");
    assert!(!evaluator.is_offer_eligible(&loans, &[], None, &offer, 700));
    assert_eq!(conditions.calls(), 0);
}

#[test]
fn test_term_check_covers_all_loans_not_just_consolidated_ones() {
    // The auto loan is outside the offer's product set but its 60-month
    // term still binds the term check
    let loans = vec![
        Loan::new("C-001", "personal", 10_000.0, 22.0, 36),
        Loan::new("C-001", "auto", 8_000.0, 11.0, 60),
    ];
    let conditions = StaticConditionEvaluator::approving();
    let evaluator = EligibilityEvaluator::new(&conditions);

    let too_short = offer("OFF-1", &["personal"], 15.0, 48, 50_000.0, "");
    assert!(!evaluator.is_offer_eligible(&loans, &[], None, &too_short, 700));

    let long_enough = offer("OFF-2", &["personal"], 15.0, 60, 50_000.0, "");
    assert!(evaluator.is_offer_eligible(&loans, &[], None, &long_enough, 700));
}

#[test]
fn test_cards_are_not_term_bound() {
    // A card-only book passes any term check
    let cards = vec![Card::new("C-001", 4_000.0, 45.0, 5.0)];
    let conditions = StaticConditionEvaluator::approving();
    let evaluator = EligibilityEvaluator::new(&conditions);

    let offer = offer("OFF-1", &["card"], 15.0, 12, 10_000.0, "");
    assert!(evaluator.is_offer_eligible(&[], &cards, None, &offer, 700));
}

#[test]
fn test_sentinel_conditions_bypass_the_delegate() {
    let loans = vec![Loan::new("C-001", "personal", 5_000.0, 20.0, 24)];
    let conditions = StaticConditionEvaluator::rejecting();
    let evaluator = EligibilityEvaluator::new(&conditions);

    for sentinel in ["", "   ", "none", "None", "None Specified"] {
        let offer = offer("OFF-1", &["personal"], 15.0, 36, 10_000.0, sentinel);
        assert!(
            evaluator.is_offer_eligible(&loans, &[], None, &offer, 700),
            "sentinel {:?} must not reach the delegate",
            sentinel
        );
    }
    assert_eq!(conditions.calls(), 0);
}

#[test]
fn test_delegate_verdict_is_authoritative() {
    let loans = vec![Loan::new("C-001", "personal", 5_000.0, 20.0, 24)];
    let offer = offer(
        "OFF-1",
        &["personal"],
        15.0,
        36,
        10_000.0,
        "No recent delinquency",
    );

    let approving = StaticConditionEvaluator::approving();
    assert!(
        EligibilityEvaluator::new(&approving).is_offer_eligible(&loans, &[], None, &offer, 700)
    );
    assert_eq!(approving.calls(), 1);

    let rejecting = StaticConditionEvaluator::rejecting();
    assert!(
        !EligibilityEvaluator::new(&rejecting).is_offer_eligible(&loans, &[], None, &offer, 700)
    );
    assert_eq!(rejecting.calls(), 1);
}

#[test]
fn test_delegate_failure_is_fail_closed() {
    let loans = vec![Loan::new("C-001", "personal", 5_000.0, 20.0, 24)];
    let conditions = StaticConditionEvaluator::failing();
    let evaluator = EligibilityEvaluator::new(&conditions);

    let offer = offer(
        "OFF-1",
        &["personal"],
        15.0,
        36,
        10_000.0,
        "No recent delinquency",
    );
    assert!(!evaluator.is_offer_eligible(&loans, &[], None, &offer, 700));
    assert_eq!(conditions.calls(), 1);
}

#[test]
fn test_eligible_offers_sorted_ascending_by_rate() {
    let loans = vec![Loan::new("C-001", "personal", 5_000.0, 20.0, 24)];
    let conditions = StaticConditionEvaluator::approving();
    let evaluator = EligibilityEvaluator::new(&conditions);

    let offers = vec![
        offer("OFF-HIGH", &["personal"], 22.0, 36, 10_000.0, ""),
        offer("OFF-LOW", &["personal"], 18.0, 36, 10_000.0, ""),
        offer("OFF-TOP", &["personal"], 25.0, 36, 10_000.0, ""),
        offer("OFF-BAD", &["boat"], 1.0, 36, 10_000.0, ""),
    ];
    let response = evaluator.eligible_offers("C-001", &loans, &[], None, &offers, 700);

    let ids: Vec<&str> = response
        .eligible_offers
        .iter()
        .map(|o| o.offer_id.as_str())
        .collect();
    assert_eq!(ids, vec!["OFF-LOW", "OFF-HIGH", "OFF-TOP"]);
    assert_eq!(response.total_offers_evaluated, 4);
    assert_eq!(response.credit_score, 700);
}

#[test]
fn test_delegate_runs_at_most_once_per_offer() {
    let loans = vec![Loan::new("C-001", "personal", 5_000.0, 20.0, 24)];
    let conditions = StaticConditionEvaluator::approving();
    let evaluator = EligibilityEvaluator::new(&conditions);

    let offers = vec![
        offer("OFF-1", &["personal"], 15.0, 36, 10_000.0, "Condition A"),
        offer("OFF-2", &["personal"], 16.0, 36, 10_000.0, "Condition B"),
        offer("OFF-3", &["personal"], 17.0, 36, 10_000.0, "none"),
    ];
    evaluator.eligible_offers("C-001", &loans, &[], None, &offers, 700);

    // Two offers carry real conditions, the third is a sentinel
    assert_eq!(conditions.calls(), 2);
}

#[test]
fn test_customer_profile_summarization() {
    let loans = vec![
        Loan::new("C-001", "personal", 18_000.0, 28.5, 36).with_days_past_due(45),
        Loan::new("C-001", "auto", 7_000.0, 11.0, 48),
    ];
    let cards = vec![Card::new("C-001", 3_500.0, 45.0, 5.0).with_days_past_due(10)];
    let cashflow = CustomerCashflow::new("C-001", 4_000.0, 2_000.0, 5.0);

    let profile = CustomerProfile::summarize(&loans, &cards, Some(&cashflow), 645);

    assert_eq!(profile.credit_score, 645);
    assert_eq!(profile.max_days_past_due, 45);
    assert!(profile.has_active_delinquency);
    assert!((profile.total_debt - 28_500.0).abs() < 1e-9);
    assert!((profile.debt_to_income_ratio - 28_500.0 / 48_000.0).abs() < 1e-9);
    assert_eq!(profile.total_accounts, 3);
    assert_eq!(profile.delinquent_accounts, 2);
    assert!((profile.delinquency_rate - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_profile_without_income_reports_zero_dti() {
    let loans = vec![Loan::new("C-001", "personal", 18_000.0, 28.5, 36)];

    let no_cashflow = CustomerProfile::summarize(&loans, &[], None, 700);
    assert_eq!(no_cashflow.debt_to_income_ratio, 0.0);

    let zero_income = CustomerCashflow::new("C-001", 0.0, 0.0, 0.0);
    let zeroed = CustomerProfile::summarize(&loans, &[], Some(&zero_income), 700);
    assert_eq!(zeroed.debt_to_income_ratio, 0.0);
}

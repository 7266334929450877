//! Working-copy instruments and the per-call arena
//!
//! A simulation never touches canonical `Loan`/`Card` records. Each call
//! builds a fresh [`DebtArena`] of [`Instrument`] working copies, steps them
//! month by month, and discards them on return.
//!
//! Interest never capitalizes onto the balance: it is accrued into the
//! running total and covered by the interest portion of each payment, so
//! balances only ever move down.

use crate::core::annuity::installment;
use crate::models::{Card, Loan};
use crate::simulation::{BALANCE_EPSILON, CARD_MINIMUM_FLOOR};

/// Kind-specific state of a working-copy instrument.
#[derive(Debug, Clone, PartialEq)]
pub enum InstrumentKind {
    /// Installment loan; the term decrements monthly with floor 1 so the
    /// annuity payment stays defined past the original schedule
    Loan { remaining_term_months: u32 },

    /// Revolving card balance with a percentage minimum
    Card { min_payment_pct: f64 },
}

/// One debt being simulated: a private, mutable copy of a loan or card.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    /// Source record id (synthetic consolidation loans get a `CONS-` id)
    id: String,

    kind: InstrumentKind,

    /// Outstanding principal or revolving balance
    balance: f64,

    /// Fixed annual rate, percent
    annual_rate_pct: f64,

    /// Delinquency carried over from the source record; read by the
    /// avalanche priority policy, never advanced by the simulation
    days_past_due: u32,
}

impl Instrument {
    pub fn from_loan(loan: &Loan) -> Self {
        Self {
            id: loan.loan_id().to_string(),
            kind: InstrumentKind::Loan {
                remaining_term_months: loan.remaining_term_months(),
            },
            balance: loan.principal(),
            annual_rate_pct: loan.annual_rate_pct(),
            days_past_due: loan.days_past_due(),
        }
    }

    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.card_id().to_string(),
            kind: InstrumentKind::Card {
                min_payment_pct: card.min_payment_pct(),
            },
            balance: card.balance(),
            annual_rate_pct: card.annual_rate_pct(),
            days_past_due: card.days_past_due(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn annual_rate_pct(&self) -> f64 {
        self.annual_rate_pct
    }

    pub fn days_past_due(&self) -> u32 {
        self.days_past_due
    }

    /// Whether the balance still exceeds the payoff residue threshold.
    pub fn is_active(&self) -> bool {
        self.balance > BALANCE_EPSILON
    }

    fn monthly_rate(&self) -> f64 {
        self.annual_rate_pct / 100.0 / 12.0
    }

    /// Interest accruing on the current balance this month.
    pub fn monthly_interest(&self) -> f64 {
        self.balance * self.monthly_rate()
    }

    /// This month's required payment, uncapped by the payoff amount.
    ///
    /// Loans: annuity installment over `max(1, term)`. Cards: the larger of
    /// the percentage minimum and `interest + 1.0`; the floor guarantees at
    /// least one currency unit of principal reduction per month, so a card
    /// whose percentage minimum is below accruing interest still amortizes.
    pub fn scheduled_payment(&self) -> f64 {
        match self.kind {
            InstrumentKind::Loan {
                remaining_term_months,
            } => installment(self.balance, self.annual_rate_pct, remaining_term_months.max(1)),
            InstrumentKind::Card { min_payment_pct } => {
                let percentage_minimum = self.balance * min_payment_pct / 100.0;
                percentage_minimum.max(self.monthly_interest() + CARD_MINIMUM_FLOOR)
            }
        }
    }

    /// Apply this month's scheduled payment, capped at the payoff amount
    /// (`balance + interest`). Returns the payment actually made.
    ///
    /// Loan terms decrement with floor 1.
    pub fn apply_scheduled_payment(&mut self) -> f64 {
        let interest = self.monthly_interest();
        let payment = self.scheduled_payment().min(self.balance + interest);
        self.balance = (self.balance - (payment - interest)).max(0.0);

        if let InstrumentKind::Loan {
            remaining_term_months,
        } = &mut self.kind
        {
            *remaining_term_months = remaining_term_months.saturating_sub(1).max(1);
        }

        payment
    }

    /// Apply a direct principal reduction (extra payment). Returns the
    /// amount actually absorbed; surplus beyond the balance is NOT spent.
    pub fn pay_down(&mut self, amount: f64) -> f64 {
        let applied = amount.min(self.balance);
        self.balance = (self.balance - applied).max(0.0);
        applied
    }
}

/// Owned, mutable working set for one simulation call.
///
/// Arena order is loans (in record order) followed by cards; priority
/// policies resolve exact ties by keeping the earliest instrument.
#[derive(Debug, Clone)]
pub struct DebtArena {
    instruments: Vec<Instrument>,
}

impl DebtArena {
    /// Build fresh working copies from canonical records.
    pub fn new(loans: &[Loan], cards: &[Card]) -> Self {
        let mut instruments = Vec::with_capacity(loans.len() + cards.len());
        instruments.extend(loans.iter().map(Instrument::from_loan));
        instruments.extend(cards.iter().map(Instrument::from_card));
        Self { instruments }
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    pub fn instruments_mut(&mut self) -> &mut [Instrument] {
        &mut self.instruments
    }

    /// Whether every balance is within the payoff residue threshold.
    pub fn all_paid_off(&self) -> bool {
        self.instruments.iter().all(|inst| !inst.is_active())
    }

    /// Interest accruing across all active instruments this month.
    pub fn monthly_interest(&self) -> f64 {
        self.instruments
            .iter()
            .filter(|inst| inst.is_active())
            .map(Instrument::monthly_interest)
            .sum()
    }

    /// Sum of this month's scheduled payments across active instruments,
    /// uncapped by payoff amounts.
    pub fn scheduled_payments_total(&self) -> f64 {
        self.instruments
            .iter()
            .filter(|inst| inst.is_active())
            .map(Instrument::scheduled_payment)
            .sum()
    }

    /// Apply every active instrument's scheduled payment.
    pub fn apply_scheduled_payments(&mut self) {
        for inst in &mut self.instruments {
            if inst.is_active() {
                inst.apply_scheduled_payment();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_minimum_uses_progress_floor_when_percentage_is_too_small() {
        // 45%/year on 1000 accrues 37.5/month; a 1% minimum (10) would never
        // cover it, so the floor wins.
        let card = Card::new("C-001", 1_000.0, 45.0, 1.0);
        let inst = Instrument::from_card(&card);

        let interest = inst.monthly_interest();
        assert_eq!(inst.scheduled_payment(), interest + 1.0);
        assert!(inst.scheduled_payment() > 1_000.0 * 0.01);
    }

    #[test]
    fn card_minimum_uses_percentage_when_it_covers_interest() {
        let card = Card::new("C-001", 1_000.0, 12.0, 5.0);
        let inst = Instrument::from_card(&card);

        // 5% of 1000 = 50 beats interest (10) + 1
        assert_eq!(inst.scheduled_payment(), 50.0);
    }

    #[test]
    fn loan_term_decrements_with_floor_one() {
        let loan = Loan::new("C-001", "personal", 1_000.0, 0.0, 2);
        let mut inst = Instrument::from_loan(&loan);

        inst.apply_scheduled_payment();
        assert_eq!(
            inst.kind,
            InstrumentKind::Loan {
                remaining_term_months: 1
            }
        );

        inst.apply_scheduled_payment();
        assert_eq!(
            inst.kind,
            InstrumentKind::Loan {
                remaining_term_months: 1
            }
        );
    }

    #[test]
    fn pay_down_absorbs_at_most_the_balance() {
        let card = Card::new("C-001", 100.0, 30.0, 5.0);
        let mut inst = Instrument::from_card(&card);

        // Surplus beyond the balance is not spent elsewhere
        assert_eq!(inst.pay_down(5_000.0), 100.0);
        assert_eq!(inst.balance(), 0.0);
        assert!(!inst.is_active());
    }

    #[test]
    fn arena_orders_loans_before_cards() {
        let loans = vec![Loan::new("C-001", "personal", 1_000.0, 10.0, 12).with_id("L-1")];
        let cards = vec![Card::new("C-001", 500.0, 30.0, 5.0).with_id("K-1")];
        let arena = DebtArena::new(&loans, &cards);

        let ids: Vec<&str> = arena.instruments().iter().map(Instrument::id).collect();
        assert_eq!(ids, vec!["L-1", "K-1"]);
    }
}

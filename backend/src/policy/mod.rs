//! Extra-payment recipient policies
//!
//! When a month's budget exceeds the sum of scheduled payments, the surplus
//! goes to exactly **one** instrument. Policies implement
//! [`ExtraPaymentPolicy`] to pick that recipient; selection is an explicit
//! max-by-key scan, never an implicit sort over floats.
//!
//! The whole surplus lands on the chosen instrument, capped at its balance;
//! anything left over is not re-routed within the same month.

use crate::simulation::instrument::Instrument;

/// Picks the single recipient of a month's surplus budget.
pub trait ExtraPaymentPolicy {
    /// Index of the instrument to receive the surplus, or `None` when no
    /// instrument is active.
    fn select_recipient(&self, instruments: &[Instrument]) -> Option<usize>;
}

/// Avalanche ranking: optionally cure delinquent debts first, then chase
/// the highest annual rate.
///
/// Priority key, best first: `(delinquency tier, rate)` where tier 0 holds
/// every instrument with `days_past_due > 0` when `cure_past_due_first` is
/// set, tier 1 everything else; within a tier the higher rate wins. Exact
/// ties keep the earliest instrument in arena order (loans before cards).
#[derive(Debug, Clone, Copy)]
pub struct AvalanchePolicy {
    pub cure_past_due_first: bool,
}

impl ExtraPaymentPolicy for AvalanchePolicy {
    fn select_recipient(&self, instruments: &[Instrument]) -> Option<usize> {
        let mut best: Option<(usize, u8, f64)> = None;

        for (idx, inst) in instruments.iter().enumerate() {
            if !inst.is_active() {
                continue;
            }

            let tier = if self.cure_past_due_first && inst.days_past_due() > 0 {
                0u8
            } else {
                1u8
            };
            let rate = inst.annual_rate_pct();

            let better = match best {
                None => true,
                Some((_, best_tier, best_rate)) => {
                    tier < best_tier || (tier == best_tier && rate > best_rate)
                }
            };
            if better {
                best = Some((idx, tier, rate));
            }
        }

        best.map(|(idx, _, _)| idx)
    }
}

/// Pure rate ranking with no delinquency override; used by the
/// consolidation re-simulation.
#[derive(Debug, Clone, Copy)]
pub struct HighestRatePolicy;

impl ExtraPaymentPolicy for HighestRatePolicy {
    fn select_recipient(&self, instruments: &[Instrument]) -> Option<usize> {
        AvalanchePolicy {
            cure_past_due_first: false,
        }
        .select_recipient(instruments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, Loan};
    use crate::simulation::DebtArena;

    fn arena() -> DebtArena {
        // L-LOW: current, 10%; L-DPD: delinquent, 8%; K-HIGH: current, 45%
        let loans = vec![
            Loan::new("C-001", "personal", 5_000.0, 10.0, 24).with_id("L-LOW"),
            Loan::new("C-001", "auto", 7_000.0, 8.0, 36)
                .with_id("L-DPD")
                .with_days_past_due(30),
        ];
        let cards = vec![Card::new("C-001", 2_000.0, 45.0, 5.0).with_id("K-HIGH")];
        DebtArena::new(&loans, &cards)
    }

    #[test]
    fn delinquent_debt_outranks_rate_when_curing_first() {
        let arena = arena();
        let policy = AvalanchePolicy {
            cure_past_due_first: true,
        };

        let idx = policy.select_recipient(arena.instruments()).unwrap();
        assert_eq!(arena.instruments()[idx].id(), "L-DPD");
    }

    #[test]
    fn highest_rate_wins_without_cure_override() {
        let arena = arena();
        let policy = AvalanchePolicy {
            cure_past_due_first: false,
        };

        let idx = policy.select_recipient(arena.instruments()).unwrap();
        assert_eq!(arena.instruments()[idx].id(), "K-HIGH");
    }

    #[test]
    fn highest_rate_policy_ignores_delinquency() {
        let arena = arena();

        let idx = HighestRatePolicy.select_recipient(arena.instruments()).unwrap();
        assert_eq!(arena.instruments()[idx].id(), "K-HIGH");
    }

    #[test]
    fn settled_instruments_are_skipped() {
        let loans = vec![
            Loan::new("C-001", "personal", 0.0, 99.0, 12).with_id("L-PAID"),
            Loan::new("C-001", "personal", 1_000.0, 5.0, 12).with_id("L-OPEN"),
        ];
        let arena = DebtArena::new(&loans, &[]);

        let idx = HighestRatePolicy.select_recipient(arena.instruments()).unwrap();
        assert_eq!(arena.instruments()[idx].id(), "L-OPEN");
    }

    #[test]
    fn exact_ties_keep_the_earliest_instrument() {
        let loans = vec![
            Loan::new("C-001", "personal", 1_000.0, 20.0, 12).with_id("L-FIRST"),
            Loan::new("C-001", "personal", 9_000.0, 20.0, 12).with_id("L-SECOND"),
        ];
        let arena = DebtArena::new(&loans, &[]);

        let idx = HighestRatePolicy.select_recipient(arena.instruments()).unwrap();
        assert_eq!(arena.instruments()[idx].id(), "L-FIRST");
    }

    #[test]
    fn empty_or_settled_book_selects_nothing() {
        assert_eq!(HighestRatePolicy.select_recipient(&[]), None);

        let loans = vec![Loan::new("C-001", "personal", 0.0, 10.0, 12)];
        let arena = DebtArena::new(&loans, &[]);
        assert_eq!(HighestRatePolicy.select_recipient(arena.instruments()), None);
    }
}

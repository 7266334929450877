//! Injected condition-evaluation capability
//!
//! Free-text offer conditions ("no delinquency in the last 12 months", ...)
//! are judged by an external collaborator, typically an LLM service behind
//! the API host. The engine only depends on the [`ConditionEvaluator`]
//! trait; any failure is treated as "not eligible" by the caller
//! (fail-closed).

use std::cell::Cell;

use thiserror::Error;

use crate::eligibility::CustomerProfile;

/// Errors from the external condition evaluator
#[derive(Debug, Error)]
pub enum ConditionError {
    /// No evaluator is configured or the service cannot be reached
    #[error("condition evaluator unavailable: {0}")]
    Unavailable(String),

    /// The evaluator ran but failed to produce a verdict
    #[error("condition evaluation failed: {0}")]
    EvaluationFailed(String),
}

/// Judges whether a customer profile meets an offer's free-text conditions.
///
/// Implementations may block on network I/O and should carry their own
/// timeout; the eligibility evaluator invokes this at most once per offer
/// and recovers any error as "not eligible".
pub trait ConditionEvaluator {
    fn evaluate(&self, profile: &CustomerProfile, conditions: &str) -> Result<bool, ConditionError>;
}

impl<E: ConditionEvaluator + ?Sized> ConditionEvaluator for &E {
    fn evaluate(&self, profile: &CustomerProfile, conditions: &str) -> Result<bool, ConditionError> {
        (**self).evaluate(profile, conditions)
    }
}

/// Verdict a [`StaticConditionEvaluator`] always returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaticVerdict {
    Approve,
    Reject,
    Fail,
}

/// Fixed-verdict evaluator with a call counter.
///
/// NOTE: Available in all builds to support integration testing (the
/// counter lets tests assert the delegate was or was not consulted), but
/// should only be used in test code.
#[derive(Debug)]
pub struct StaticConditionEvaluator {
    verdict: StaticVerdict,
    calls: Cell<usize>,
}

impl StaticConditionEvaluator {
    pub fn new(verdict: StaticVerdict) -> Self {
        Self {
            verdict,
            calls: Cell::new(0),
        }
    }

    /// Always meets conditions.
    pub fn approving() -> Self {
        Self::new(StaticVerdict::Approve)
    }

    /// Never meets conditions.
    pub fn rejecting() -> Self {
        Self::new(StaticVerdict::Reject)
    }

    /// Always errors, exercising the fail-closed path.
    pub fn failing() -> Self {
        Self::new(StaticVerdict::Fail)
    }

    /// Number of times the evaluator has been consulted.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ConditionEvaluator for StaticConditionEvaluator {
    fn evaluate(&self, _profile: &CustomerProfile, _conditions: &str) -> Result<bool, ConditionError> {
        self.calls.set(self.calls.get() + 1);
        match self.verdict {
            StaticVerdict::Approve => Ok(true),
            StaticVerdict::Reject => Ok(false),
            StaticVerdict::Fail => Err(ConditionError::Unavailable(
                "static evaluator configured to fail".to_string(),
            )),
        }
    }
}

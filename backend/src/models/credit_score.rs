//! Credit score observation
//!
//! One point of a customer's time-ordered score history. The engine never
//! does date arithmetic; histories are stored oldest-first and the last
//! entry is the current score.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single credit score observation (conventional 300-850 scale).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditScore {
    /// Unique record identifier (UUID unless supplied)
    score_id: String,

    /// Owning customer
    customer_id: String,

    /// Observation date, ISO-8601 (`YYYY-MM-DD`); opaque to the engine
    observed_on: String,

    /// Score value (300-850)
    score: u32,
}

impl CreditScore {
    pub fn new(customer_id: impl Into<String>, observed_on: impl Into<String>, score: u32) -> Self {
        Self {
            score_id: Uuid::new_v4().to_string(),
            customer_id: customer_id.into(),
            observed_on: observed_on.into(),
            score,
        }
    }

    pub fn score_id(&self) -> &str {
        &self.score_id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn observed_on(&self) -> &str {
        &self.observed_on
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

//! Consolidation offer
//!
//! Terms under which a lender would merge a customer's eligible debts into
//! one new instrument. Offers arrive from the API layer as caller input;
//! they are never persisted by the engine.

use serde::{Deserialize, Serialize};

use crate::models::card::CARD_PRODUCT_TYPE;

/// Conditions strings treated as "no conditions" (case-insensitive).
const NO_CONDITIONS_SENTINELS: [&str; 2] = ["none", "none specified"];

/// A debt consolidation offer.
///
/// # Example
/// ```
/// use debt_analyzer_core_rs::models::ConsolidationOffer;
///
/// let offer = ConsolidationOffer {
///     offer_id: "OFF-1".to_string(),
///     product_types_eligible: vec!["personal".to_string(), "card".to_string()],
///     new_rate_pct: 14.0,
///     max_term_months: 48,
///     max_consolidated_balance: 30_000.0,
///     conditions: "None".to_string(),
/// };
/// assert!(offer.covers_product_type("card"));
/// assert!(!offer.has_review_conditions());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsolidationOffer {
    /// Offer identifier assigned by the issuing lender
    pub offer_id: String,

    /// Product types the offer will absorb ("card" covers card balances)
    pub product_types_eligible: Vec<String>,

    /// Annual rate of the new consolidated instrument, percent
    pub new_rate_pct: f64,

    /// Term of the new instrument in months
    pub max_term_months: u32,

    /// Ceiling on the amount the lender will consolidate
    pub max_consolidated_balance: f64,

    /// Free-text underwriting conditions; evaluated by the external
    /// condition evaluator when non-trivial
    pub conditions: String,
}

impl ConsolidationOffer {
    /// Whether debts tagged `product_type` fall under this offer.
    pub fn covers_product_type(&self, product_type: &str) -> bool {
        self.product_types_eligible
            .iter()
            .any(|eligible| eligible == product_type)
    }

    /// Whether the offer covers revolving card balances.
    pub fn covers_cards(&self) -> bool {
        self.covers_product_type(CARD_PRODUCT_TYPE)
    }

    /// Whether the conditions text needs external review. Empty strings and
    /// the recognized sentinels ("none", "none specified") do not.
    pub fn has_review_conditions(&self) -> bool {
        let trimmed = self.conditions.trim();
        if trimmed.is_empty() {
            return false;
        }
        let lowered = trimmed.to_ascii_lowercase();
        !NO_CONDITIONS_SENTINELS.contains(&lowered.as_str())
    }
}

//! Domain models for the debt analyzer

pub mod card;
pub mod cashflow;
pub mod credit_score;
pub mod loan;
pub mod offer;
pub mod results;

// Re-exports
pub use card::{Card, CARD_PRODUCT_TYPE};
pub use cashflow::CustomerCashflow;
pub use credit_score::CreditScore;
pub use loan::Loan;
pub use offer::ConsolidationOffer;
pub use results::{
    ConsolidationSavings, ConsolidationSimulationResult, DebtAnalysisResult,
    EligibleOffersResponse, PaymentSimulationResult, SavingsComparison, Termination,
};

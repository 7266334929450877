//! Deterministic result fingerprinting
//!
//! SHA-256 over a canonical (recursively key-sorted) JSON rendering.
//! Identical inputs always hash identically regardless of map iteration
//! order, which lets callers cache analyses and lets tests assert the
//! determinism property without field-by-field comparison.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors raised while fingerprinting a value
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("fingerprint serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Compute the lowercase-hex SHA-256 fingerprint of any serializable value.
///
/// # Example
/// ```
/// use debt_analyzer_core_rs::models::{PaymentSimulationResult, Termination};
/// use debt_analyzer_core_rs::orchestrator::audit::fingerprint;
///
/// let result = PaymentSimulationResult {
///     months: 36,
///     total_interest: 4_812.5,
///     termination: Termination::Completed,
/// };
/// assert_eq!(fingerprint(&result).unwrap(), fingerprint(&result.clone()).unwrap());
/// ```
pub fn fingerprint<T: Serialize>(value: &T) -> Result<String, AuditError> {
    let value = serde_json::to_value(value)?;
    let json = serde_json::to_string(&canonicalize(value))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

/// Recursively sort object keys for a canonical representation.
fn canonicalize(value: Value) -> Value {
    use std::collections::BTreeMap;

    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

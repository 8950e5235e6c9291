use serde_json::Error as JsonError;
use thiserror::Error;

/// Errors surfaced by payload building and request signing.
///
/// Every variant names the offending field or check; callers translate
/// these into operator-facing messages.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// A required builder input was not staged or is unusable.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A requested order state is outside the gateway vocabulary.
    #[error("Invalid order state: {0}")]
    InvalidState(String),

    /// Per-store configuration needed for the operation is missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The declared order total and the line items disagree by more than
    /// rounding noise; the payload would be rejected by the gateway.
    #[error("Order total drifts by {drift} minor units across {lines} cart lines, too large to reconcile")]
    TotalsMismatch { drift: i64, lines: usize },

    /// Payload serialization failed while preparing bytes to sign.
    #[error("Serialization error: {0}")]
    Serialization(#[from] JsonError),
}

impl BuilderError {
    /// Missing-field shorthand used by the builders.
    pub fn missing(field: &str) -> Self {
        BuilderError::Validation(format!("required field is not staged: {}", field))
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::BuilderError;

/// Lifecycle states the gateway accepts for an order.
///
/// This is a closed vocabulary: the builder never computes transitions,
/// it only rejects values outside the set. Which state applies to an
/// order is decided by the caller's order-status integration.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrderState {
    Confirmed,
    Approved,
    NeedsReview,
    OnHold,
    Cancelled,
}

impl OrderState {
    /// Validates a raw state string against the gateway vocabulary.
    pub fn parse(value: &str) -> Result<Self, BuilderError> {
        value
            .parse()
            .map_err(|_| BuilderError::InvalidState(value.to_string()))
    }
}

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Minor units per whole currency unit for decimal currencies.
pub const CENTS_PER_WHOLE: u32 = 100;

/// Converts decimal currency amounts into integer minor units.
///
/// The scale is fixed at construction; the gateway works in cents, so
/// [`PriceConverter::default`] uses a scale of 100. Conversion rounds
/// half away from zero, matching how the host platform rounds per-line
/// tax amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceConverter {
    scale: u32,
}

impl Default for PriceConverter {
    fn default() -> Self {
        Self::new(CENTS_PER_WHOLE)
    }
}

impl PriceConverter {
    pub fn new(scale: u32) -> Self {
        Self { scale }
    }

    /// Converts a decimal amount to minor units.
    pub fn convert(&self, amount: Decimal) -> i64 {
        (amount * Decimal::from(self.scale))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .unwrap_or(0)
    }

    /// Converts a raw collaborator-supplied value to minor units.
    ///
    /// Non-numeric input yields 0. Collaborators pass absent or
    /// placeholder amounts through this path, so leniency is the
    /// contract here, not an error.
    pub fn parse(&self, raw: &str) -> i64 {
        raw.trim()
            .parse::<Decimal>()
            .map(|amount| self.convert(amount))
            .unwrap_or(0)
    }
}

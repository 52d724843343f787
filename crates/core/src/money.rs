//! Monetary amounts.
//!
//! Bids and starting prices are exact decimal values, never floats.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::ValueObject;

/// A monetary amount.
///
/// `Amount` does not enforce a sign on construction; each operation decides
/// which signs it accepts (e.g. starting bids must be positive, while bid
/// placement rejects negatives with its own error).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_order_by_value() {
        assert!(Amount::new(dec!(1000.50)) < Amount::new(dec!(1001)));
    }

    #[test]
    fn sign_checks() {
        assert!(Amount::new(dec!(-1)).is_negative());
        assert!(!Amount::ZERO.is_negative());
        assert!(!Amount::ZERO.is_positive());
        assert!(Amount::new(dec!(0.01)).is_positive());
    }
}

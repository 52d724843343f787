//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are sequential `u64` values assigned by the repositories,
//! starting at 1. `0` is never a valid assigned identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when an identifier fails to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {kind} identifier '{value}'")]
pub struct InvalidId {
    pub kind: &'static str,
    pub value: String,
}

/// Identifier of a vehicle in the inventory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(u64);

/// Identifier of an auction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuctionId(u64);

macro_rules! impl_sequence_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// The first identifier a repository hands out.
            pub const FIRST: Self = Self(1);

            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(self) -> u64 {
                self.0
            }

            /// The identifier following this one in the sequence.
            pub fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s.parse::<u64>().map_err(|_| InvalidId {
                    kind: $name,
                    value: s.to_string(),
                })?;
                Ok(Self(value))
            }
        }
    };
}

impl_sequence_newtype!(VehicleId, "vehicle");
impl_sequence_newtype!(AuctionId, "auction");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_at_one_and_increments() {
        let first = VehicleId::FIRST;
        assert_eq!(first.value(), 1);
        assert_eq!(first.next(), VehicleId::new(2));
    }

    #[test]
    fn parses_from_string() {
        let id: AuctionId = "42".parse().unwrap();
        assert_eq!(id, AuctionId::new(42));
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let err = "abc".parse::<VehicleId>().unwrap_err();
        assert_eq!(err.kind, "vehicle");
    }
}

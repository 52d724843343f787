//! Type-dependent vehicle attribute value objects.
//!
//! Each attribute applies to exactly one family of vehicle types; type
//! pairing is enforced where the attribute is attached to a vehicle
//! (`VehicleAttribute::for_type`), range rules are enforced here.

use serde::{Deserialize, Serialize};

use vams_core::ValueObject;

use crate::error::{VehicleError, VehicleResult};

/// Number of doors (Hatchback and Sedan only).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DoorCount(u8);

impl DoorCount {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 5;

    pub fn new(count: u8) -> VehicleResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(VehicleError::validation(
                "number_of_doors",
                format!("door count is {count} and should be between 2 and 5"),
            ));
        }
        Ok(Self(count))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl ValueObject for DoorCount {}

/// Number of seats (SUV only).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatCount(u8);

impl SeatCount {
    pub const MIN: u8 = 1;

    pub fn new(count: u8) -> VehicleResult<Self> {
        if count < Self::MIN {
            return Err(VehicleError::validation(
                "number_of_seats",
                format!("seat count is {count} and must be at least 1"),
            ));
        }
        Ok(Self(count))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl ValueObject for SeatCount {}

/// Load capacity in kilograms (Truck only).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadCapacity(f64);

impl LoadCapacity {
    pub fn new(capacity: f64) -> VehicleResult<Self> {
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(VehicleError::validation(
                "load_capacity",
                format!("load capacity is {capacity} and cannot be negative"),
            ));
        }
        Ok(Self(capacity))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl ValueObject for LoadCapacity {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn door_count_range_is_inclusive() {
        assert!(DoorCount::new(2).is_ok());
        assert!(DoorCount::new(5).is_ok());
        assert!(DoorCount::new(1).is_err());
        assert!(DoorCount::new(6).is_err());
    }

    #[test]
    fn seat_count_requires_at_least_one() {
        assert!(SeatCount::new(0).is_err());
        assert_eq!(SeatCount::new(7).unwrap().value(), 7);
    }

    #[test]
    fn load_capacity_rejects_negative_and_non_finite() {
        assert!(LoadCapacity::new(-0.5).is_err());
        assert!(LoadCapacity::new(f64::NAN).is_err());
        assert!(LoadCapacity::new(f64::INFINITY).is_err());
        assert_eq!(LoadCapacity::new(0.0).unwrap().value(), 0.0);
    }

    proptest! {
        #[test]
        fn door_count_accepts_exactly_two_to_five(count in 0u8..=20) {
            let result = DoorCount::new(count);
            prop_assert_eq!(result.is_ok(), (2..=5).contains(&count));
        }

        #[test]
        fn load_capacity_accepts_every_non_negative_finite_value(capacity in 0.0f64..1.0e9) {
            prop_assert_eq!(LoadCapacity::new(capacity).unwrap().value(), capacity);
        }
    }
}

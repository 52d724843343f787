//! Typed vehicle search.
//!
//! The searchable field set is closed: each criterion pairs a field with a
//! typed value and its own extraction, so there is no runtime type coercion
//! and no ambiguous equality. Criteria combine with logical AND over exact
//! equality.

use serde::{Deserialize, Serialize};

use vams_vehicles::{Vehicle, VehicleStatus, VehicleType};

/// One field/value pair of a vehicle search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCriterion {
    Type(VehicleType),
    Manufacturer(String),
    Model(String),
    Year(i32),
    Status(VehicleStatus),
}

impl SearchCriterion {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            SearchCriterion::Type(vehicle_type) => vehicle.vehicle_type() == *vehicle_type,
            SearchCriterion::Manufacturer(manufacturer) => {
                vehicle.manufacturer() == manufacturer
            }
            SearchCriterion::Model(model) => vehicle.model() == model,
            SearchCriterion::Year(year) => vehicle.year() == *year,
            SearchCriterion::Status(status) => vehicle.status() == *status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vams_core::{Amount, VehicleId};
    use vams_vehicles::AddVehicle;

    fn corolla() -> Vehicle {
        let command = AddVehicle {
            vehicle_type: VehicleType::Sedan,
            manufacturer: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            starting_bid: Amount::from(9000),
            number_of_doors: Some(4),
            number_of_seats: None,
            load_capacity: None,
        };
        Vehicle::create(VehicleId::FIRST, &command).unwrap()
    }

    #[test]
    fn matches_by_exact_equality() {
        let vehicle = corolla();
        assert!(SearchCriterion::Type(VehicleType::Sedan).matches(&vehicle));
        assert!(SearchCriterion::Manufacturer("Toyota".to_string()).matches(&vehicle));
        assert!(SearchCriterion::Year(2020).matches(&vehicle));
        assert!(SearchCriterion::Status(VehicleStatus::Available).matches(&vehicle));

        assert!(!SearchCriterion::Manufacturer("toyota".to_string()).matches(&vehicle));
        assert!(!SearchCriterion::Year(2021).matches(&vehicle));
    }
}

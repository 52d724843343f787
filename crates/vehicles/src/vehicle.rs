use serde::{Deserialize, Serialize};

use vams_core::{Amount, AuctionId, Entity, VehicleId};

use crate::attributes::{DoorCount, LoadCapacity, SeatCount};
use crate::error::{VehicleError, VehicleResult};

/// Vehicle type taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Hatchback,
    Sedan,
    Suv,
    Truck,
}

impl core::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            VehicleType::Hatchback => "hatchback",
            VehicleType::Sedan => "sedan",
            VehicleType::Suv => "suv",
            VehicleType::Truck => "truck",
        };
        f.write_str(name)
    }
}

/// Vehicle status lifecycle.
///
/// Transitions happen only through auction outcomes: `Available -> Reserved`
/// when an auction starts, `Reserved -> Sold` or `Reserved -> Available`
/// when it closes. `Sold` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Reserved,
    Sold,
}

impl core::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Reserved => "reserved",
            VehicleStatus::Sold => "sold",
        };
        f.write_str(name)
    }
}

/// The single type-dependent attribute of a vehicle.
///
/// Exactly one variant exists per vehicle and it always matches the vehicle
/// type; the pairing is checked once in [`VehicleAttribute::for_type`] and
/// is structural from then on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleAttribute {
    Doors(DoorCount),
    Seats(SeatCount),
    LoadCapacity(LoadCapacity),
}

impl VehicleAttribute {
    /// Build the attribute for a vehicle type from the optional command
    /// fields, rejecting attributes supplied for the wrong type and
    /// requiring the one that matches.
    pub fn for_type(
        vehicle_type: VehicleType,
        number_of_doors: Option<u8>,
        number_of_seats: Option<u8>,
        load_capacity: Option<f64>,
    ) -> VehicleResult<Self> {
        match vehicle_type {
            VehicleType::Hatchback | VehicleType::Sedan => {
                forbid("number_of_seats", number_of_seats.is_some(), vehicle_type)?;
                forbid("load_capacity", load_capacity.is_some(), vehicle_type)?;
                let doors = require("number_of_doors", number_of_doors, vehicle_type)?;
                Ok(Self::Doors(DoorCount::new(doors)?))
            }
            VehicleType::Suv => {
                forbid("number_of_doors", number_of_doors.is_some(), vehicle_type)?;
                forbid("load_capacity", load_capacity.is_some(), vehicle_type)?;
                let seats = require("number_of_seats", number_of_seats, vehicle_type)?;
                Ok(Self::Seats(SeatCount::new(seats)?))
            }
            VehicleType::Truck => {
                forbid("number_of_doors", number_of_doors.is_some(), vehicle_type)?;
                forbid("number_of_seats", number_of_seats.is_some(), vehicle_type)?;
                let capacity = require("load_capacity", load_capacity, vehicle_type)?;
                Ok(Self::LoadCapacity(LoadCapacity::new(capacity)?))
            }
        }
    }
}

fn forbid(field: &'static str, present: bool, vehicle_type: VehicleType) -> VehicleResult<()> {
    if present {
        return Err(VehicleError::validation(
            field,
            format!("not applicable to {vehicle_type} vehicles"),
        ));
    }
    Ok(())
}

fn require<T>(
    field: &'static str,
    value: Option<T>,
    vehicle_type: VehicleType,
) -> VehicleResult<T> {
    value.ok_or_else(|| {
        VehicleError::validation(field, format!("required for {vehicle_type} vehicles"))
    })
}

/// Command: AddVehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddVehicle {
    pub vehicle_type: VehicleType,
    pub manufacturer: String,
    pub model: String,
    pub year: i32,
    pub starting_bid: Amount,
    pub number_of_doors: Option<u8>,
    pub number_of_seats: Option<u8>,
    pub load_capacity: Option<f64>,
}

/// Command: UpdateInventoryByAuction.
///
/// Asks the inventory to re-read the referenced auction's lot snapshot and
/// apply each lot's outcome status to the matching inventory vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInventoryByAuction {
    pub auction_id: AuctionId,
}

/// Entity: a vehicle in the inventory.
///
/// The inventory record is the single source of truth for vehicle existence
/// and availability. Auctions work on their own snapshots; status changes
/// flow back only through [`UpdateInventoryByAuction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: VehicleId,
    vehicle_type: VehicleType,
    manufacturer: String,
    model: String,
    year: i32,
    starting_bid: Amount,
    status: VehicleStatus,
    attribute: VehicleAttribute,
}

impl Vehicle {
    /// Validate an [`AddVehicle`] command and construct the vehicle.
    ///
    /// Fails on the first invalid field; nothing is partially constructed.
    /// New vehicles always start `Available`.
    pub fn create(id: VehicleId, command: &AddVehicle) -> VehicleResult<Self> {
        if command.manufacturer.trim().is_empty() {
            return Err(VehicleError::validation(
                "manufacturer",
                "manufacturer cannot be empty",
            ));
        }
        if command.model.trim().is_empty() {
            return Err(VehicleError::validation("model", "model cannot be empty"));
        }
        if command.year <= 0 {
            return Err(VehicleError::validation(
                "year",
                format!("year is {} and must be positive", command.year),
            ));
        }
        if !command.starting_bid.is_positive() {
            return Err(VehicleError::validation(
                "starting_bid",
                format!(
                    "starting bid is {} and must be positive",
                    command.starting_bid
                ),
            ));
        }

        let attribute = VehicleAttribute::for_type(
            command.vehicle_type,
            command.number_of_doors,
            command.number_of_seats,
            command.load_capacity,
        )?;

        Ok(Self {
            id,
            vehicle_type: command.vehicle_type,
            manufacturer: command.manufacturer.clone(),
            model: command.model.clone(),
            year: command.year,
            starting_bid: command.starting_bid,
            status: VehicleStatus::Available,
            attribute,
        })
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn starting_bid(&self) -> Amount {
        self.starting_bid
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn attribute(&self) -> VehicleAttribute {
        self.attribute
    }

    pub fn number_of_doors(&self) -> Option<DoorCount> {
        match self.attribute {
            VehicleAttribute::Doors(doors) => Some(doors),
            _ => None,
        }
    }

    pub fn number_of_seats(&self) -> Option<SeatCount> {
        match self.attribute {
            VehicleAttribute::Seats(seats) => Some(seats),
            _ => None,
        }
    }

    pub fn load_capacity(&self) -> Option<LoadCapacity> {
        match self.attribute {
            VehicleAttribute::LoadCapacity(capacity) => Some(capacity),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// Apply an auction-driven status. Idempotent: re-applying the current
    /// status is always allowed. `Sold` never regresses.
    pub fn apply_status(&mut self, status: VehicleStatus) -> VehicleResult<()> {
        if self.status == status {
            return Ok(());
        }
        let allowed = matches!(
            (self.status, status),
            (VehicleStatus::Available, VehicleStatus::Reserved)
                | (VehicleStatus::Reserved, VehicleStatus::Sold)
                | (VehicleStatus::Reserved, VehicleStatus::Available)
        );
        if !allowed {
            return Err(VehicleError::InvalidTransition {
                id: self.id,
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        Ok(())
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> VehicleId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_command(vehicle_type: VehicleType) -> AddVehicle {
        AddVehicle {
            vehicle_type,
            manufacturer: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2021,
            starting_bid: Amount::new(dec!(12000)),
            number_of_doors: None,
            number_of_seats: None,
            load_capacity: None,
        }
    }

    fn test_id() -> VehicleId {
        VehicleId::FIRST
    }

    #[test]
    fn hatchback_carries_exactly_a_door_count() {
        let mut command = base_command(VehicleType::Hatchback);
        command.number_of_doors = Some(3);

        let vehicle = Vehicle::create(test_id(), &command).unwrap();

        assert_eq!(vehicle.status(), VehicleStatus::Available);
        assert_eq!(vehicle.number_of_doors().unwrap().value(), 3);
        assert!(vehicle.number_of_seats().is_none());
        assert!(vehicle.load_capacity().is_none());
    }

    #[test]
    fn suv_carries_exactly_a_seat_count() {
        let mut command = base_command(VehicleType::Suv);
        command.number_of_seats = Some(7);

        let vehicle = Vehicle::create(test_id(), &command).unwrap();

        assert_eq!(vehicle.number_of_seats().unwrap().value(), 7);
        assert!(vehicle.number_of_doors().is_none());
        assert!(vehicle.load_capacity().is_none());
    }

    #[test]
    fn truck_carries_exactly_a_load_capacity() {
        let mut command = base_command(VehicleType::Truck);
        command.load_capacity = Some(1250.0);

        let vehicle = Vehicle::create(test_id(), &command).unwrap();

        assert_eq!(vehicle.load_capacity().unwrap().value(), 1250.0);
        assert!(vehicle.number_of_doors().is_none());
        assert!(vehicle.number_of_seats().is_none());
    }

    #[test]
    fn attribute_for_the_wrong_type_is_rejected_outright() {
        let mut command = base_command(VehicleType::Sedan);
        command.number_of_doors = Some(4);
        command.number_of_seats = Some(5);

        let err = Vehicle::create(test_id(), &command).unwrap_err();
        match err {
            VehicleError::Validation { field, .. } => assert_eq!(field, "number_of_seats"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_attribute_is_rejected() {
        let command = base_command(VehicleType::Truck);

        let err = Vehicle::create(test_id(), &command).unwrap_err();
        match err {
            VehicleError::Validation { field, .. } => assert_eq!(field, "load_capacity"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_door_count_names_the_field() {
        let mut command = base_command(VehicleType::Hatchback);
        command.number_of_doors = Some(6);

        let err = Vehicle::create(test_id(), &command).unwrap_err();
        match err {
            VehicleError::Validation { field, message } => {
                assert_eq!(field, "number_of_doors");
                assert!(message.contains('6'));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_manufacturer_fails_first() {
        let mut command = base_command(VehicleType::Sedan);
        command.manufacturer = "  ".to_string();
        command.model = String::new();

        let err = Vehicle::create(test_id(), &command).unwrap_err();
        match err {
            VehicleError::Validation { field, .. } => assert_eq!(field, "manufacturer"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_year_and_starting_bid_are_rejected() {
        let mut command = base_command(VehicleType::Sedan);
        command.number_of_doors = Some(4);
        command.year = 0;
        assert!(matches!(
            Vehicle::create(test_id(), &command),
            Err(VehicleError::Validation { field: "year", .. })
        ));

        command.year = 2020;
        command.starting_bid = Amount::ZERO;
        assert!(matches!(
            Vehicle::create(test_id(), &command),
            Err(VehicleError::Validation {
                field: "starting_bid",
                ..
            })
        ));
    }

    #[test]
    fn lifecycle_moves_only_through_auction_outcomes() {
        let mut command = base_command(VehicleType::Sedan);
        command.number_of_doors = Some(4);
        let mut vehicle = Vehicle::create(test_id(), &command).unwrap();

        // Available -> Sold is not reachable without a reservation.
        assert!(vehicle.apply_status(VehicleStatus::Sold).is_err());

        vehicle.apply_status(VehicleStatus::Reserved).unwrap();
        // Re-applying the same snapshot status is a no-op.
        vehicle.apply_status(VehicleStatus::Reserved).unwrap();

        vehicle.apply_status(VehicleStatus::Sold).unwrap();
        assert_eq!(vehicle.status(), VehicleStatus::Sold);

        // Sold is terminal.
        assert!(vehicle.apply_status(VehicleStatus::Available).is_err());
        assert!(vehicle.apply_status(VehicleStatus::Reserved).is_err());
        vehicle.apply_status(VehicleStatus::Sold).unwrap();
    }

    #[test]
    fn released_vehicle_becomes_available_again() {
        let mut command = base_command(VehicleType::Suv);
        command.number_of_seats = Some(5);
        let mut vehicle = Vehicle::create(test_id(), &command).unwrap();

        vehicle.apply_status(VehicleStatus::Reserved).unwrap();
        vehicle.apply_status(VehicleStatus::Available).unwrap();
        assert!(vehicle.is_available());
    }
}

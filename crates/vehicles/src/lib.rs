//! Vehicles domain module.
//!
//! This crate contains business rules for the vehicle inventory, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod attributes;
pub mod error;
pub mod vehicle;

pub use attributes::{DoorCount, LoadCapacity, SeatCount};
pub use error::{VehicleError, VehicleResult};
pub use vehicle::{
    AddVehicle, UpdateInventoryByAuction, Vehicle, VehicleAttribute, VehicleStatus, VehicleType,
};

//! Vehicle inventory services.

use std::sync::Arc;

use vams_auctions::AuctionError;
use vams_core::VehicleId;
use vams_vehicles::{
    AddVehicle, UpdateInventoryByAuction, Vehicle, VehicleError, VehicleResult,
};

use crate::contracts::{AuctionSnapshots, InventoryUpdate, VehicleAvailability};
use crate::repository::VehicleRepository;
use crate::search::SearchCriterion;

/// Read side of the inventory.
#[derive(Debug)]
pub struct VehicleQueryService<R> {
    vehicles: Arc<R>,
}

impl<R: VehicleRepository> VehicleQueryService<R> {
    pub fn new(vehicles: Arc<R>) -> Self {
        Self { vehicles }
    }

    /// All vehicles currently available for auction.
    pub fn available_vehicles(&self) -> VehicleResult<Vec<Vehicle>> {
        let mut vehicles = self.vehicles.all()?;
        vehicles.retain(Vehicle::is_available);
        Ok(vehicles)
    }

    /// Every vehicle the inventory knows of, in insertion order.
    pub fn all_vehicles(&self) -> VehicleResult<Vec<Vehicle>> {
        self.vehicles.all()
    }

    pub fn vehicle_by_id(&self, id: VehicleId) -> VehicleResult<Vehicle> {
        self.vehicles.get(id)?.ok_or(VehicleError::NotFound(id))
    }

    /// Vehicles matching **all** criteria by exact equality.
    ///
    /// At least one criterion is required; matching nothing is an empty
    /// list, never an error.
    pub fn search_vehicles(&self, criteria: &[SearchCriterion]) -> VehicleResult<Vec<Vehicle>> {
        if criteria.is_empty() {
            return Err(VehicleError::EmptySearch);
        }
        let mut vehicles = self.vehicles.all()?;
        vehicles.retain(|vehicle| criteria.iter().all(|criterion| criterion.matches(vehicle)));
        Ok(vehicles)
    }
}

impl<R: VehicleRepository> VehicleAvailability for VehicleQueryService<R> {
    fn available_vehicles(&self) -> VehicleResult<Vec<Vehicle>> {
        VehicleQueryService::available_vehicles(self)
    }
}

/// Write side of the inventory.
///
/// Owns vehicle creation and the auction-driven status synchronization; the
/// auction collection is reached only through the read-only snapshot
/// contract.
pub struct InventoryCommandService<R> {
    vehicles: Arc<R>,
    auctions: Arc<dyn AuctionSnapshots>,
}

impl<R: VehicleRepository> InventoryCommandService<R> {
    pub fn new(vehicles: Arc<R>, auctions: Arc<dyn AuctionSnapshots>) -> Self {
        Self { vehicles, auctions }
    }

    /// Validate and store a new vehicle with the next sequential id.
    ///
    /// Nothing is stored when validation fails.
    pub fn add_vehicle(&self, command: &AddVehicle) -> VehicleResult<Vehicle> {
        let id = self.vehicles.next_id()?;
        let vehicle = Vehicle::create(id, command)?;
        self.vehicles.add(vehicle.clone())?;

        tracing::info!(
            vehicle_id = %id,
            vehicle_type = %vehicle.vehicle_type(),
            "vehicle added to inventory"
        );
        Ok(vehicle)
    }

    /// Apply the per-lot statuses of the referenced auction's snapshot to
    /// the inventory.
    ///
    /// Valid while the auction is open (reservation) and after it closed
    /// (finalization); the snapshot drives each vehicle individually, so
    /// re-applying the same snapshot is a no-op. Returns the number of
    /// vehicles whose status changed.
    pub fn update_inventory_by_auction(
        &self,
        command: &UpdateInventoryByAuction,
    ) -> VehicleResult<usize> {
        let auction = self
            .auctions
            .auction_by_id(command.auction_id)
            .map_err(|err| match err {
                AuctionError::NotFound(id) => VehicleError::AuctionNotFound(id),
                other => VehicleError::repository(other.to_string()),
            })?;

        let mut updated = 0;
        for lot in auction.vehicles() {
            // A snapshot can only reference vehicles that existed at auction
            // start; anything else is skipped rather than failed.
            let Some(mut vehicle) = self.vehicles.get(lot.id())? else {
                continue;
            };

            let target = lot.status().inventory_status();
            if vehicle.status() == target {
                continue;
            }
            vehicle.apply_status(target)?;
            self.vehicles.update(vehicle)?;
            updated += 1;
        }

        tracing::info!(
            auction_id = %command.auction_id,
            auction_status = %auction.status(),
            updated,
            "inventory synchronized from auction snapshot"
        );
        Ok(updated)
    }
}

impl<R: VehicleRepository> InventoryUpdate for InventoryCommandService<R> {
    fn update_inventory_by_auction(
        &self,
        command: UpdateInventoryByAuction,
    ) -> VehicleResult<usize> {
        InventoryCommandService::update_inventory_by_auction(self, &command)
    }
}

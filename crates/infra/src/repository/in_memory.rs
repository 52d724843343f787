//! In-memory repositories.
//!
//! Plain `RwLock<Vec<_>>` collections with no durability across process
//! restarts. Lock poisoning surfaces as a repository error, never a panic.

use std::sync::RwLock;

use vams_auctions::{Auction, AuctionError, AuctionResult};
use vams_core::{AuctionId, Entity, VehicleId};
use vams_vehicles::{Vehicle, VehicleError, VehicleResult};

use super::{AuctionRepository, VehicleRepository};

/// In-memory master vehicle collection.
#[derive(Debug, Default)]
pub struct InMemoryVehicleRepository {
    inventory: RwLock<Vec<Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VehicleRepository for InMemoryVehicleRepository {
    fn add(&self, vehicle: Vehicle) -> VehicleResult<()> {
        let mut inventory = self
            .inventory
            .write()
            .map_err(|_| VehicleError::repository("lock poisoned"))?;
        inventory.push(vehicle);
        Ok(())
    }

    fn remove(&self, id: VehicleId) -> VehicleResult<()> {
        let mut inventory = self
            .inventory
            .write()
            .map_err(|_| VehicleError::repository("lock poisoned"))?;
        inventory.retain(|vehicle| vehicle.id() != id);
        Ok(())
    }

    fn get(&self, id: VehicleId) -> VehicleResult<Option<Vehicle>> {
        let inventory = self
            .inventory
            .read()
            .map_err(|_| VehicleError::repository("lock poisoned"))?;
        Ok(inventory.iter().find(|vehicle| vehicle.id() == id).cloned())
    }

    fn all(&self) -> VehicleResult<Vec<Vehicle>> {
        let inventory = self
            .inventory
            .read()
            .map_err(|_| VehicleError::repository("lock poisoned"))?;
        Ok(inventory.clone())
    }

    fn update(&self, vehicle: Vehicle) -> VehicleResult<()> {
        let mut inventory = self
            .inventory
            .write()
            .map_err(|_| VehicleError::repository("lock poisoned"))?;
        let slot = inventory
            .iter_mut()
            .find(|stored| stored.id() == vehicle.id())
            .ok_or(VehicleError::NotFound(vehicle.id()))?;
        *slot = vehicle;
        Ok(())
    }

    fn next_id(&self) -> VehicleResult<VehicleId> {
        let inventory = self
            .inventory
            .read()
            .map_err(|_| VehicleError::repository("lock poisoned"))?;
        Ok(inventory
            .iter()
            .map(|vehicle| vehicle.id())
            .max()
            .map(VehicleId::next)
            .unwrap_or(VehicleId::FIRST))
    }
}

/// In-memory auction collection.
#[derive(Debug, Default)]
pub struct InMemoryAuctionRepository {
    auctions: RwLock<Vec<Auction>>,
}

impl InMemoryAuctionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuctionRepository for InMemoryAuctionRepository {
    fn add(&self, auction: Auction) -> AuctionResult<()> {
        let mut auctions = self
            .auctions
            .write()
            .map_err(|_| AuctionError::repository("lock poisoned"))?;
        auctions.push(auction);
        Ok(())
    }

    fn remove(&self, id: AuctionId) -> AuctionResult<()> {
        let mut auctions = self
            .auctions
            .write()
            .map_err(|_| AuctionError::repository("lock poisoned"))?;
        auctions.retain(|auction| auction.id() != id);
        Ok(())
    }

    fn get(&self, id: AuctionId) -> AuctionResult<Option<Auction>> {
        let auctions = self
            .auctions
            .read()
            .map_err(|_| AuctionError::repository("lock poisoned"))?;
        Ok(auctions.iter().find(|auction| auction.id() == id).cloned())
    }

    fn all(&self) -> AuctionResult<Vec<Auction>> {
        let auctions = self
            .auctions
            .read()
            .map_err(|_| AuctionError::repository("lock poisoned"))?;
        Ok(auctions.clone())
    }

    fn update(&self, auction: Auction) -> AuctionResult<()> {
        let mut auctions = self
            .auctions
            .write()
            .map_err(|_| AuctionError::repository("lock poisoned"))?;
        let slot = auctions
            .iter_mut()
            .find(|stored| stored.id() == auction.id())
            .ok_or(AuctionError::NotFound(auction.id()))?;
        *slot = auction;
        Ok(())
    }

    fn next_id(&self) -> AuctionResult<AuctionId> {
        let auctions = self
            .auctions
            .read()
            .map_err(|_| AuctionError::repository("lock poisoned"))?;
        Ok(auctions
            .iter()
            .map(|auction| auction.id())
            .max()
            .map(AuctionId::next)
            .unwrap_or(AuctionId::FIRST))
    }
}

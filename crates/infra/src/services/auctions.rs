//! Auction services.

use std::sync::Arc;

use vams_auctions::{
    Auction, AuctionError, AuctionResult, AuctionVehicle, EndAuction, PlaceBid, StartAuction,
};
use vams_core::{AuctionId, Entity, VehicleId};
use vams_vehicles::UpdateInventoryByAuction;

use crate::contracts::{AuctionSnapshots, InventoryUpdate, VehicleAvailability};
use crate::repository::AuctionRepository;

/// Read side of the auction collection.
#[derive(Debug)]
pub struct AuctionQueryService<R> {
    auctions: Arc<R>,
}

impl<R: AuctionRepository> AuctionQueryService<R> {
    pub fn new(auctions: Arc<R>) -> Self {
        Self { auctions }
    }

    pub fn auction_by_id(&self, id: AuctionId) -> AuctionResult<Auction> {
        self.auctions.get(id)?.ok_or(AuctionError::NotFound(id))
    }

    /// All known auctions, oldest first.
    pub fn auctions(&self) -> AuctionResult<Vec<Auction>> {
        self.auctions.all()
    }
}

impl<R: AuctionRepository> AuctionSnapshots for AuctionQueryService<R> {
    fn auction_by_id(&self, id: AuctionId) -> AuctionResult<Auction> {
        AuctionQueryService::auction_by_id(self, id)
    }
}

/// Write side of the auction collection: the open/bid/close state machine.
///
/// Vehicles are reached only through the read-only availability contract;
/// status changes flow back through the inventory-update command after an
/// auction opens and after it closes.
pub struct AuctionCommandService<R> {
    auctions: Arc<R>,
    vehicles: Arc<dyn VehicleAvailability>,
    inventory: Arc<dyn InventoryUpdate>,
}

impl<R: AuctionRepository> AuctionCommandService<R> {
    pub fn new(
        auctions: Arc<R>,
        vehicles: Arc<dyn VehicleAvailability>,
        inventory: Arc<dyn InventoryUpdate>,
    ) -> Self {
        Self {
            auctions,
            vehicles,
            inventory,
        }
    }

    /// Open a new auction over the requested, currently available vehicles.
    ///
    /// A failed start registers no auction and reserves nothing.
    pub fn start_auction(&self, command: &StartAuction) -> AuctionResult<Auction> {
        let available = self.vehicles.available_vehicles()?;
        if available.is_empty() || command.vehicle_ids.is_empty() {
            return Err(AuctionError::NoVehiclesAvailable);
        }

        let missing: Vec<VehicleId> = command
            .vehicle_ids
            .iter()
            .filter(|id| !available.iter().any(|vehicle| vehicle.id() == **id))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(AuctionError::VehiclesUnavailable(missing));
        }

        // Snapshot exactly the requested vehicles, in request order,
        // ignoring duplicate ids.
        let mut lots: Vec<AuctionVehicle> = Vec::with_capacity(command.vehicle_ids.len());
        for id in &command.vehicle_ids {
            if lots.iter().any(|lot| lot.id() == *id) {
                continue;
            }
            if let Some(vehicle) = available.iter().find(|vehicle| vehicle.id() == *id) {
                lots.push(AuctionVehicle::snapshot(vehicle));
            }
        }

        let id = self.auctions.next_id()?;
        let auction = Auction::open(id, lots, command.end_date, command.occurred_at)?;
        self.auctions.add(auction.clone())?;

        // Reserve the snapshotted vehicles; roll the registration back if
        // the inventory cannot be updated.
        if let Err(err) = self
            .inventory
            .update_inventory_by_auction(UpdateInventoryByAuction { auction_id: id })
        {
            self.auctions.remove(id)?;
            return Err(AuctionError::Inventory(err));
        }

        tracing::info!(
            auction_id = %id,
            lots = auction.vehicles().len(),
            end = %auction.end(),
            "auction opened"
        );
        Ok(auction)
    }

    /// Place a bid on a vehicle within an open auction.
    ///
    /// Returns the updated auction snapshot; a rejected bid changes nothing.
    pub fn place_bid(&self, command: &PlaceBid) -> AuctionResult<Auction> {
        let mut auction = self
            .auctions
            .get(command.auction_id)?
            .ok_or(AuctionError::NotFound(command.auction_id))?;

        auction.place_bid(command.vehicle_id, command.amount)?;
        self.auctions.update(auction.clone())?;

        tracing::debug!(
            auction_id = %command.auction_id,
            vehicle_id = %command.vehicle_id,
            amount = %command.amount,
            "bid accepted"
        );
        Ok(auction)
    }

    /// Close an auction, settle its lots and finalize the inventory.
    ///
    /// Fails if invoked before the end date; closing is explicit and
    /// happens exactly once.
    pub fn end_auction(&self, command: &EndAuction) -> AuctionResult<Auction> {
        let mut auction = self
            .auctions
            .get(command.auction_id)?
            .ok_or(AuctionError::NotFound(command.auction_id))?;

        auction.close(command.occurred_at)?;
        self.auctions.update(auction.clone())?;

        self.inventory
            .update_inventory_by_auction(UpdateInventoryByAuction {
                auction_id: command.auction_id,
            })?;

        let sold = auction
            .vehicles()
            .iter()
            .filter(|lot| lot.winner_bid().is_some())
            .count();
        tracing::info!(
            auction_id = %command.auction_id,
            sold,
            released = auction.vehicles().len() - sold,
            "auction closed"
        );
        Ok(auction)
    }
}

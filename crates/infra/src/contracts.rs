//! Coordination contracts between the two service families.
//!
//! The auction service depends on a read-only vehicle-availability query and
//! emits inventory-update commands; the inventory service depends on a
//! read-only auction-snapshot query. Neither family ever holds a mutable
//! reference into the other's collection.

use vams_auctions::{Auction, AuctionResult};
use vams_core::AuctionId;
use vams_vehicles::{UpdateInventoryByAuction, Vehicle, VehicleResult};

/// Read-only view of currently available inventory vehicles.
///
/// Implemented by the vehicle query service; consumed by the auction
/// command service when starting an auction.
pub trait VehicleAvailability: Send + Sync {
    fn available_vehicles(&self) -> VehicleResult<Vec<Vehicle>>;
}

/// Read-only access to auction snapshots.
///
/// Implemented by the auction query service; consumed by the inventory
/// command service when applying auction outcomes.
pub trait AuctionSnapshots: Send + Sync {
    fn auction_by_id(&self, id: AuctionId) -> AuctionResult<Auction>;
}

/// Inventory-update command surface.
///
/// Implemented by the inventory command service; invoked by the auction
/// command service right after an auction opens (reserve) and right after
/// it closes (finalize). Returns the number of vehicles whose status
/// actually changed.
pub trait InventoryUpdate: Send + Sync {
    fn update_inventory_by_auction(
        &self,
        command: UpdateInventoryByAuction,
    ) -> VehicleResult<usize>;
}

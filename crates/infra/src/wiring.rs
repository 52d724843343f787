//! Service wiring.

use std::sync::Arc;

use crate::repository::{InMemoryAuctionRepository, InMemoryVehicleRepository};
use crate::services::auctions::{AuctionCommandService, AuctionQueryService};
use crate::services::vehicles::{InventoryCommandService, VehicleQueryService};

/// A fully wired, in-memory auction house.
///
/// Construction order mirrors the dependency direction: repositories, then
/// query services (repository-only), then the inventory command service
/// (which reads auction snapshots), then the auction command service (which
/// reads availability and emits inventory updates). The command services
/// never reference each other's write side.
pub struct AuctionHouse {
    pub vehicle_queries: Arc<VehicleQueryService<InMemoryVehicleRepository>>,
    pub inventory_commands: Arc<InventoryCommandService<InMemoryVehicleRepository>>,
    pub auction_queries: Arc<AuctionQueryService<InMemoryAuctionRepository>>,
    pub auction_commands: Arc<AuctionCommandService<InMemoryAuctionRepository>>,
}

impl AuctionHouse {
    pub fn in_memory() -> Self {
        let vehicles = Arc::new(InMemoryVehicleRepository::new());
        let auctions = Arc::new(InMemoryAuctionRepository::new());

        let vehicle_queries = Arc::new(VehicleQueryService::new(vehicles.clone()));
        let auction_queries = Arc::new(AuctionQueryService::new(auctions.clone()));
        let inventory_commands = Arc::new(InventoryCommandService::new(
            vehicles,
            auction_queries.clone(),
        ));
        let auction_commands = Arc::new(AuctionCommandService::new(
            auctions,
            vehicle_queries.clone(),
            inventory_commands.clone(),
        ));

        Self {
            vehicle_queries,
            inventory_commands,
            auction_queries,
            auction_commands,
        }
    }
}

impl Default for AuctionHouse {
    fn default() -> Self {
        Self::in_memory()
    }
}

//! Injected repositories behind minimal interfaces.
//!
//! Repositories are the only holders of entity collections. The interface is
//! deliberately small (`add` / `remove` / `get` / `all` / `update` /
//! `next_id`) so the in-memory implementations can later be substituted with
//! a persistent store without touching the services.

pub mod in_memory;

use vams_auctions::{Auction, AuctionResult};
use vams_core::{AuctionId, VehicleId};
use vams_vehicles::{Vehicle, VehicleResult};

pub use in_memory::{InMemoryAuctionRepository, InMemoryVehicleRepository};

/// Master vehicle collection.
pub trait VehicleRepository: Send + Sync {
    fn add(&self, vehicle: Vehicle) -> VehicleResult<()>;
    fn remove(&self, id: VehicleId) -> VehicleResult<()>;
    fn get(&self, id: VehicleId) -> VehicleResult<Option<Vehicle>>;
    /// All vehicles in insertion order.
    fn all(&self) -> VehicleResult<Vec<Vehicle>>;
    /// Replace the stored vehicle with the same id, keeping its position.
    fn update(&self, vehicle: Vehicle) -> VehicleResult<()>;
    /// The next free sequential identifier.
    fn next_id(&self) -> VehicleResult<VehicleId>;
}

/// Auction collection.
pub trait AuctionRepository: Send + Sync {
    fn add(&self, auction: Auction) -> AuctionResult<()>;
    fn remove(&self, id: AuctionId) -> AuctionResult<()>;
    fn get(&self, id: AuctionId) -> AuctionResult<Option<Auction>>;
    /// All auctions in insertion order, oldest first.
    fn all(&self) -> AuctionResult<Vec<Auction>>;
    /// Replace the stored auction with the same id, keeping its position.
    fn update(&self, auction: Auction) -> AuctionResult<()>;
    /// The next free sequential identifier.
    fn next_id(&self) -> AuctionResult<AuctionId>;
}

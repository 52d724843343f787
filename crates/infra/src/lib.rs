//! Infrastructure layer: repositories, services and wiring.
//!
//! The domain crates stay pure; this crate owns the injected repositories,
//! the command/query services on top of them, and the one-directional
//! coordination contracts between the vehicle and auction service families.

pub mod contracts;
pub mod repository;
pub mod search;
pub mod services;
pub mod wiring;


pub use contracts::{AuctionSnapshots, InventoryUpdate, VehicleAvailability};
pub use repository::{
    AuctionRepository, InMemoryAuctionRepository, InMemoryVehicleRepository, VehicleRepository,
};
pub use search::SearchCriterion;
pub use services::auctions::{AuctionCommandService, AuctionQueryService};
pub use services::vehicles::{InventoryCommandService, VehicleQueryService};
pub use wiring::AuctionHouse;

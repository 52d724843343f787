//! Auctions domain module.
//!
//! This crate contains the auction/bidding state machine, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). An auction
//! owns private snapshots of the vehicles it sells; the shared inventory is
//! only ever updated through explicit inventory-update commands.

pub mod auction;
pub mod bid;
pub mod error;
pub mod lot;

pub use auction::{Auction, AuctionStatus, EndAuction, PlaceBid, StartAuction};
pub use bid::Bid;
pub use error::{AuctionError, AuctionResult};
pub use lot::{AuctionVehicle, LotStatus};

//! `vams-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod id;
pub mod money;

pub use entity::{Entity, ValueObject};
pub use id::{AuctionId, InvalidId, VehicleId};
pub use money::Amount;

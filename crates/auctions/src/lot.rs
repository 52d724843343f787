//! Auctioned vehicle snapshots (lots).

use serde::{Deserialize, Serialize};

use vams_core::{Amount, Entity, VehicleId};
use vams_vehicles::{Vehicle, VehicleStatus, VehicleType};

use crate::bid::Bid;
use crate::error::AuctionResult;

/// Status of a lot inside its auction.
///
/// `InAuction` while the auction is open; at close every lot becomes either
/// `Sold` (at least one bid) or `Unsold` (released back to the pool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    InAuction,
    Sold,
    Unsold,
}

impl LotStatus {
    /// The inventory status this lot outcome maps to. The mapping is
    /// idempotent: re-applying the same snapshot yields the same inventory
    /// state.
    pub fn inventory_status(self) -> VehicleStatus {
        match self {
            LotStatus::InAuction => VehicleStatus::Reserved,
            LotStatus::Sold => VehicleStatus::Sold,
            LotStatus::Unsold => VehicleStatus::Available,
        }
    }
}

impl core::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            LotStatus::InAuction => "in auction",
            LotStatus::Sold => "sold",
            LotStatus::Unsold => "unsold",
        };
        f.write_str(name)
    }
}

/// An auction's private copy of a vehicle.
///
/// Copied from the inventory when the auction starts; bid history and the
/// winning bid live here, never on the shared inventory record. Mutating a
/// lot never mutates the inventory vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionVehicle {
    id: VehicleId,
    vehicle_type: VehicleType,
    manufacturer: String,
    model: String,
    year: i32,
    starting_bid: Amount,
    status: LotStatus,
    winner_bid: Option<Amount>,
    bids: Vec<Bid>,
}

impl AuctionVehicle {
    /// Snapshot an inventory vehicle into a fresh lot.
    pub fn snapshot(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id(),
            vehicle_type: vehicle.vehicle_type(),
            manufacturer: vehicle.manufacturer().to_string(),
            model: vehicle.model().to_string(),
            year: vehicle.year(),
            starting_bid: vehicle.starting_bid(),
            status: LotStatus::InAuction,
            winner_bid: None,
            bids: Vec::new(),
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn starting_bid(&self) -> Amount {
        self.starting_bid
    }

    pub fn status(&self) -> LotStatus {
        self.status
    }

    pub fn winner_bid(&self) -> Option<Amount> {
        self.winner_bid
    }

    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    pub fn highest_bid(&self) -> Option<Amount> {
        self.bids.iter().map(|bid| bid.amount()).max()
    }

    /// Validate and append a bid. A rejected bid leaves the list untouched.
    pub(crate) fn place_bid(&mut self, amount: Amount) -> AuctionResult<()> {
        let bid = Bid::place(amount, self.starting_bid, &self.bids)?;
        self.bids.push(bid);
        Ok(())
    }

    /// Settle the lot at auction close: sold to the highest bid, or released
    /// unsold when nobody bid.
    pub(crate) fn settle(&mut self) {
        match self.highest_bid() {
            Some(highest) => {
                self.status = LotStatus::Sold;
                self.winner_bid = Some(highest);
            }
            None => {
                self.status = LotStatus::Unsold;
                self.winner_bid = None;
            }
        }
    }
}

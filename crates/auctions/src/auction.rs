use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vams_core::{Amount, AuctionId, Entity, VehicleId};

use crate::error::{AuctionError, AuctionResult};
use crate::lot::AuctionVehicle;

/// Auction status lifecycle.
///
/// An auction is `Open` immediately on construction; the only transition is
/// `Open -> Closed` and it is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Open,
    Closed,
}

impl core::fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            AuctionStatus::Open => "open",
            AuctionStatus::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// Command: StartAuction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartAuction {
    pub vehicle_ids: Vec<VehicleId>,
    pub end_date: DateTime<Utc>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: PlaceBid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceBid {
    pub auction_id: AuctionId,
    pub vehicle_id: VehicleId,
    pub amount: Amount,
}

/// Command: EndAuction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndAuction {
    pub auction_id: AuctionId,
    pub occurred_at: DateTime<Utc>,
}

/// Entity: a time-boxed auction over a set of vehicle lots.
///
/// The auction exclusively owns its [`AuctionVehicle`] snapshots; bids and
/// outcomes accumulate here and flow back to the inventory only through the
/// explicit inventory-update command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    id: AuctionId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: AuctionStatus,
    vehicles: Vec<AuctionVehicle>,
}

impl Auction {
    /// Open a new auction over the given lots.
    ///
    /// Requires at least one lot and an end date strictly after `now`. There
    /// is no pending state: a constructed auction is open and accepts bids.
    pub fn open(
        id: AuctionId,
        vehicles: Vec<AuctionVehicle>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AuctionResult<Self> {
        if vehicles.is_empty() {
            return Err(AuctionError::NoVehiclesAvailable);
        }
        if end <= now {
            return Err(AuctionError::InvalidEndDate { end, now });
        }

        Ok(Self {
            id,
            start: now,
            end,
            status: AuctionStatus::Open,
            vehicles,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == AuctionStatus::Open
    }

    /// Lots in snapshot order.
    pub fn vehicles(&self) -> &[AuctionVehicle] {
        &self.vehicles
    }

    pub fn lot(&self, vehicle_id: VehicleId) -> Option<&AuctionVehicle> {
        self.vehicles.iter().find(|lot| lot.id() == vehicle_id)
    }

    /// Place a bid on one of this auction's lots.
    ///
    /// Checks run in a fixed order: auction open, vehicle part of the
    /// snapshot, then the bid ladder rules. A failed bid mutates nothing.
    pub fn place_bid(&mut self, vehicle_id: VehicleId, amount: Amount) -> AuctionResult<()> {
        if self.status == AuctionStatus::Closed {
            return Err(AuctionError::Closed(self.id));
        }

        let auction_id = self.id;
        let lot = self
            .vehicles
            .iter_mut()
            .find(|lot| lot.id() == vehicle_id)
            .ok_or(AuctionError::VehicleNotInAuction {
                auction_id,
                vehicle_id,
            })?;

        lot.place_bid(amount)
    }

    /// Close the auction, settling every lot.
    ///
    /// Fails `TooEarly` while `now` is before the end date and
    /// `AlreadyClosed` on a second attempt. Lots with bids are sold to the
    /// highest bid; the rest are released unsold. Terminal.
    pub fn close(&mut self, now: DateTime<Utc>) -> AuctionResult<()> {
        if now < self.end {
            return Err(AuctionError::TooEarly {
                auction_id: self.id,
                end: self.end,
            });
        }
        if self.status == AuctionStatus::Closed {
            return Err(AuctionError::AlreadyClosed(self.id));
        }

        for lot in &mut self.vehicles {
            lot.settle();
        }
        self.status = AuctionStatus::Closed;
        Ok(())
    }
}

impl Entity for Auction {
    type Id = AuctionId;

    fn id(&self) -> AuctionId {
        self.id
    }
}

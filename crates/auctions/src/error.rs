//! Auction domain error model.

use chrono::{DateTime, Utc};
use thiserror::Error;

use vams_core::{Amount, AuctionId, VehicleId};
use vams_vehicles::VehicleError;

/// Result type used across the auctions domain.
pub type AuctionResult<T> = Result<T, AuctionError>;

/// Auction-domain error.
///
/// Every variant is a deterministic business-rule violation; none are
/// transient or retryable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuctionError {
    /// No auction with the given id exists.
    #[error("auction with id {0} not found")]
    NotFound(AuctionId),

    /// The vehicle is not part of this auction's snapshot.
    #[error("vehicle {vehicle_id} is not part of auction {auction_id}")]
    VehicleNotInAuction {
        auction_id: AuctionId,
        vehicle_id: VehicleId,
    },

    /// Bids cannot be placed once an auction is closed.
    #[error("cannot place a bid because auction {0} already ended")]
    Closed(AuctionId),

    /// The auction was closed before; closing is irreversible and happens once.
    #[error("auction {0} was already closed")]
    AlreadyClosed(AuctionId),

    /// Closing was requested before the auction's end date.
    #[error("cannot close auction {auction_id} before its end date ({end})")]
    TooEarly {
        auction_id: AuctionId,
        end: DateTime<Utc>,
    },

    /// Bid amounts can never be negative.
    #[error("bid amount ({0}) cannot be negative")]
    NegativeBid(Amount),

    /// The first bid on a vehicle must reach its starting bid.
    #[error("bid amount ({amount}) must reach the vehicle starting bid ({starting_bid})")]
    BelowStartingBid {
        amount: Amount,
        starting_bid: Amount,
    },

    /// Follow-up bids must strictly exceed the current highest bid.
    #[error("bid amount ({amount}) must be greater than the current highest bid ({highest})")]
    BidTooLow { amount: Amount, highest: Amount },

    /// Starting an auction requires at least one available vehicle.
    #[error("there is no vehicle to be auctioned")]
    NoVehiclesAvailable,

    /// One or more requested vehicles are not available for auction.
    #[error("vehicles not available to be auctioned: {}", format_ids(.0))]
    VehiclesUnavailable(Vec<VehicleId>),

    /// The end date must lie strictly in the future at creation time.
    #[error("end date ({end}) must be after the auction start ({now})")]
    InvalidEndDate {
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    /// An inventory failure surfaced while coordinating with the vehicles
    /// domain (reserving or releasing vehicles).
    #[error("inventory update failed: {0}")]
    Inventory(#[from] VehicleError),

    /// The backing repository failed (e.g. poisoned lock).
    #[error("auction repository failure: {0}")]
    Repository(String),
}

impl AuctionError {
    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository(message.into())
    }
}

fn format_ids(ids: &[VehicleId]) -> String {
    let rendered: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    rendered.join(", ")
}

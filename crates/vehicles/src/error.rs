//! Vehicle domain error model.
//!
//! Keep this focused on deterministic business failures (validation,
//! lifecycle violations, not-found). Infrastructure concerns surface only
//! through `Repository`.

use thiserror::Error;

use vams_core::{AuctionId, VehicleId};

use crate::vehicle::VehicleStatus;

/// Result type used across the vehicles domain.
pub type VehicleResult<T> = Result<T, VehicleError>;

/// Vehicle-domain error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VehicleError {
    /// A vehicle field failed validation; names the first failing field.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// No vehicle with the given id exists in the inventory.
    #[error("vehicle with id {0} not found")]
    NotFound(VehicleId),

    /// A status change that the lifecycle does not allow.
    #[error("vehicle {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: VehicleId,
        from: VehicleStatus,
        to: VehicleStatus,
    },

    /// An inventory update referenced an auction that does not exist.
    #[error("auction with id {0} not found")]
    AuctionNotFound(AuctionId),

    /// A search was issued without any criteria.
    #[error("at least one criterion is required to search vehicles")]
    EmptySearch,

    /// The backing repository failed (e.g. poisoned lock).
    #[error("vehicle repository failure: {0}")]
    Repository(String),
}

impl VehicleError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository(message.into())
    }
}

//! Domain errors reported by the parcel engine.

use thiserror::Error;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, ParcelError>;

/// Recoverable outcomes that abort a registration or lookup.
///
/// None of these are faults: callers render them and carry on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParcelError {
    /// Source or destination is not a known location.
    #[error("unknown location '{name}'")]
    InvalidLocation {
        /// Name as supplied by the caller.
        name: String,
    },

    /// Neither a direct nor a two-hop path exists.
    #[error("no available route from {from} to {to}")]
    NoRouteFound {
        /// Requested origin.
        from: String,
        /// Requested destination.
        to: String,
    },

    /// The payment step was cancelled.
    #[error("payment of {price} was declined")]
    PaymentDeclined {
        /// Price that was quoted for the shipment.
        price: u32,
    },

    /// No parcel carries the requested id.
    #[error("parcel {id} not found")]
    NotFound {
        /// Id that was looked up.
        id: u32,
    },

    /// Weight is zero, negative or not a number.
    #[error("weight must be a positive number of kilograms, got {weight}")]
    InvalidWeight {
        /// Weight as supplied by the caller.
        weight: f64,
    },

    /// Sender or receiver is blank.
    #[error("{field} name must not be empty")]
    MissingName {
        /// Which party was blank.
        field: &'static str,
    },

    /// The configured network is inconsistent.
    #[error("invalid network configuration: {reason}")]
    InvalidNetwork {
        /// Human readable description of the problem.
        reason: String,
    },
}

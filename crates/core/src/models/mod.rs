#![allow(missing_docs)]

//! Shared domain models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::network::RouteEdge;

/// Delivery progress of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParcelStatus {
    /// Registered, not yet moved.
    Pending,
    /// Moving, more than one hop left.
    InTransit,
    /// Exactly one hop left.
    OutForDelivery,
    /// At the destination. Terminal.
    Delivered,
}

impl ParcelStatus {
    /// User-facing label.
    pub fn label(self) -> &'static str {
        match self {
            ParcelStatus::Pending => "Pending",
            ParcelStatus::InTransit => "In Transit",
            ParcelStatus::OutForDelivery => "Out for Delivery",
            ParcelStatus::Delivered => "Delivered",
        }
    }

    /// Whether further ticks can change the parcel.
    pub fn is_terminal(self) -> bool {
        matches!(self, ParcelStatus::Delivered)
    }
}

impl fmt::Display for ParcelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Point-in-time record of where a parcel was and in what state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    /// When the event was recorded.
    pub at: DateTime<Utc>,
    /// Location after the event.
    pub location: String,
    /// Status after the event.
    pub status: ParcelStatus,
}

/// Fields supplied when registering a parcel.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelRequest {
    /// Sender display name.
    pub sender: String,
    /// Receiver display name.
    pub receiver: String,
    /// Weight in kilograms, strictly positive.
    pub weight: f64,
    /// Origin location.
    pub source: String,
    /// Destination location.
    pub destination: String,
}

/// Route and price computed for a prospective shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Edges from source to destination.
    pub route: Vec<RouteEdge>,
    /// Sum of the route's distances.
    pub total_distance: u32,
    /// Price charged for the shipment.
    pub price: u32,
}

/// A registered shipment. Route, distance and price are fixed at registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    pub id: u32,
    pub sender: String,
    pub receiver: String,
    pub weight: f64,
    pub source: String,
    pub destination: String,
    pub route: Vec<RouteEdge>,
    pub total_distance: u32,
    pub shipping_price: u32,
    pub current_location: String,
    /// Index into `route` of the next edge to traverse.
    pub current_route_index: usize,
    pub status: ParcelStatus,
    pub registered_at: DateTime<Utc>,
    /// Registration followed by one event per hop.
    #[serde(default)]
    pub history: Vec<TrackingEvent>,
}

impl Parcel {
    pub(crate) fn new(id: u32, request: ParcelRequest, quote: Quote) -> Self {
        let registered_at = Utc::now();
        let history = vec![TrackingEvent {
            at: registered_at,
            location: request.source.clone(),
            status: ParcelStatus::Pending,
        }];
        Self {
            id,
            sender: request.sender,
            receiver: request.receiver,
            weight: request.weight,
            current_location: request.source.clone(),
            source: request.source,
            destination: request.destination,
            route: quote.route,
            total_distance: quote.total_distance,
            shipping_price: quote.price,
            current_route_index: 0,
            status: ParcelStatus::Pending,
            registered_at,
            history,
        }
    }

    /// Hops not yet traversed.
    pub fn remaining_hops(&self) -> usize {
        self.route.len().saturating_sub(self.current_route_index)
    }

    /// Next location the parcel will move to, if any.
    pub fn next_stop(&self) -> Option<&str> {
        self.route
            .get(self.current_route_index)
            .map(|edge| edge.to.as_str())
    }
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_names() {
        assert_eq!(capitalize_first("bANGALORE"), "Bangalore");
        assert_eq!(capitalize_first("a"), "A");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn status_labels() {
        assert_eq!(ParcelStatus::OutForDelivery.to_string(), "Out for Delivery");
        assert!(ParcelStatus::Delivered.is_terminal());
        assert!(!ParcelStatus::InTransit.is_terminal());
    }
}

//! Hop-by-hop delivery state machine.

use chrono::Utc;
use tracing::{debug, info};

use crate::{
    models::{Parcel, ParcelStatus, TrackingEvent},
    registry::ParcelRegistry,
};

/// What a single tick did to a parcel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Already delivered; nothing changed.
    Idle,
    /// Moved along one edge.
    Advanced {
        /// Location before the hop.
        from: String,
        /// Location after the hop.
        to: String,
        /// Status after the hop.
        status: ParcelStatus,
    },
    /// Route already exhausted; marked delivered without moving.
    ForcedDelivered,
}

/// Totals for a batch tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Parcels that moved one hop.
    pub advanced: usize,
    /// Parcels that became delivered during this tick.
    pub delivered: usize,
    /// Parcels that were already delivered.
    pub idle: usize,
}

/// Advances parcels along their fixed routes.
pub struct DeliveryEngine;

impl DeliveryEngine {
    /// Move `parcel` one hop and recompute its status.
    pub fn tick(parcel: &mut Parcel) -> TickOutcome {
        if parcel.status.is_terminal() {
            return TickOutcome::Idle;
        }

        if parcel.current_route_index >= parcel.route.len() {
            parcel.current_location = parcel.destination.clone();
            parcel.status = ParcelStatus::Delivered;
            record(parcel);
            return TickOutcome::ForcedDelivered;
        }

        let from = parcel.current_location.clone();
        parcel.current_location = parcel.route[parcel.current_route_index].to.clone();
        parcel.current_route_index += 1;

        parcel.status = if parcel.current_location == parcel.destination {
            ParcelStatus::Delivered
        } else if parcel.current_route_index + 1 == parcel.route.len() {
            ParcelStatus::OutForDelivery
        } else {
            ParcelStatus::InTransit
        };
        record(parcel);

        TickOutcome::Advanced {
            from,
            to: parcel.current_location.clone(),
            status: parcel.status,
        }
    }

    /// Tick every parcel in registration order.
    pub fn tick_all(registry: &mut ParcelRegistry) -> TickSummary {
        let mut summary = TickSummary::default();
        for parcel in registry.parcels_mut() {
            match Self::tick(parcel) {
                TickOutcome::Idle => summary.idle += 1,
                TickOutcome::Advanced { status, .. } => {
                    summary.advanced += 1;
                    if status == ParcelStatus::Delivered {
                        summary.delivered += 1;
                    }
                }
                TickOutcome::ForcedDelivered => summary.delivered += 1,
            }
        }
        info!(
            advanced = summary.advanced,
            delivered = summary.delivered,
            idle = summary.idle,
            "Moved all parcels one step forward"
        );
        summary
    }
}

fn record(parcel: &mut Parcel) {
    debug!(
        id = parcel.id,
        location = %parcel.current_location,
        status = %parcel.status,
        "parcel moved"
    );
    parcel.history.push(TrackingEvent {
        at: Utc::now(),
        location: parcel.current_location.clone(),
        status: parcel.status,
    });
}

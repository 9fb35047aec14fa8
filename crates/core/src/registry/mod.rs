//! In-memory parcel store and registration flow.

/// Lock-guarded handle around the registry.
pub mod shared;

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    error::{ParcelError, Result},
    models::{capitalize_first, Parcel, ParcelRequest, Quote},
    network::{router::total_distance, Network},
    pricing::PricingEngine,
};

pub use shared::SharedRegistry;

/// Id handed to the first successfully registered parcel.
pub const FIRST_PARCEL_ID: u32 = 101;

/// Owns every parcel for the lifetime of the process.
///
/// Parcels live in insertion order and are never removed. Ids come from an
/// explicit counter that only advances on a committed registration, so a
/// declined payment or a missing route never burns an id.
#[derive(Debug)]
pub struct ParcelRegistry {
    network: Arc<Network>,
    pricing: PricingEngine,
    parcels: Vec<Parcel>,
    next_id: u32,
}

impl ParcelRegistry {
    /// Create an empty registry over the given network.
    pub fn new(network: Arc<Network>, pricing: PricingEngine) -> Self {
        Self {
            network,
            pricing,
            parcels: Vec::new(),
            next_id: FIRST_PARCEL_ID,
        }
    }

    /// Network used for validation and routing.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Id the next successful registration will receive.
    pub fn next_id(&self) -> u32 {
        debug_assert_eq!(
            self.next_id as usize,
            FIRST_PARCEL_ID as usize + self.parcels.len()
        );
        self.next_id
    }

    /// Validate locations, route and price a prospective shipment without
    /// registering anything.
    pub fn quote(&self, source: &str, destination: &str, weight: f64) -> Result<Quote> {
        let locations = self.network.locations();
        for name in [source, destination] {
            if !locations.is_valid(name) {
                return Err(ParcelError::InvalidLocation {
                    name: name.to_string(),
                });
            }
        }

        // A parcel already at its destination could never be observed as anything
        // but Delivered, so identical endpoints count as unroutable.
        let route = if source == destination {
            Vec::new()
        } else {
            self.network.router().find_route(source, destination)
        };
        if route.is_empty() {
            return Err(ParcelError::NoRouteFound {
                from: source.to_string(),
                to: destination.to_string(),
            });
        }

        let total_distance =
            total_distance(&route).ok_or_else(|| ParcelError::InvalidNetwork {
                reason: format!("route {source} -> {destination} is longer than {} km", u32::MAX),
            })?;
        let price = self.pricing.price(total_distance, weight);
        Ok(Quote {
            route,
            total_distance,
            price,
        })
    }

    /// Register a parcel once payment has been confirmed.
    ///
    /// Every check runs before the id is allocated; on any failure the registry
    /// is left untouched.
    pub fn register(&mut self, request: ParcelRequest, payment_confirmed: bool) -> Result<&Parcel> {
        let sender = capitalize_first(request.sender.trim());
        if sender.is_empty() {
            return Err(ParcelError::MissingName { field: "sender" });
        }
        let receiver = capitalize_first(request.receiver.trim());
        if receiver.is_empty() {
            return Err(ParcelError::MissingName { field: "receiver" });
        }
        if !(request.weight.is_finite() && request.weight > 0.0) {
            return Err(ParcelError::InvalidWeight {
                weight: request.weight,
            });
        }

        let quote = self.quote(&request.source, &request.destination, request.weight)?;

        if !payment_confirmed {
            warn!(
                source = %request.source,
                destination = %request.destination,
                price = quote.price,
                "Payment declined; parcel not added"
            );
            return Err(ParcelError::PaymentDeclined { price: quote.price });
        }

        let id = self.next_id;
        self.next_id += 1;
        let parcel = Parcel::new(
            id,
            ParcelRequest {
                sender,
                receiver,
                ..request
            },
            quote,
        );
        info!(
            id,
            source = %parcel.source,
            destination = %parcel.destination,
            distance = parcel.total_distance,
            price = parcel.shipping_price,
            "Parcel registered"
        );
        self.parcels.push(parcel);
        Ok(&self.parcels[self.parcels.len() - 1])
    }

    /// All parcels in registration order.
    pub fn list(&self) -> &[Parcel] {
        &self.parcels
    }

    /// Look up a parcel by id.
    pub fn find_by_id(&self, id: u32) -> Result<&Parcel> {
        self.parcels
            .iter()
            .find(|parcel| parcel.id == id)
            .ok_or(ParcelError::NotFound { id })
    }

    /// Number of registered parcels.
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    /// Whether no parcel has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    pub(crate) fn parcels_mut(&mut self) -> &mut [Parcel] {
        &mut self.parcels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParcelStatus;
    use crate::network::{NetworkConfig, RouteEdge};

    fn registry() -> ParcelRegistry {
        ParcelRegistry::new(Arc::new(Network::default()), PricingEngine::default())
    }

    fn request(source: &str, destination: &str, weight: f64) -> ParcelRequest {
        ParcelRequest {
            sender: "aLICE".to_string(),
            receiver: "bob".to_string(),
            weight,
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }

    #[test]
    fn registers_pending_parcel_at_source() -> anyhow::Result<()> {
        let mut registry = registry();
        let parcel = registry.register(request("Vijayawada", "Bangalore", 12.0), true)?;
        assert_eq!(parcel.id, FIRST_PARCEL_ID);
        assert_eq!(parcel.sender, "Alice");
        assert_eq!(parcel.receiver, "Bob");
        assert_eq!(parcel.status, ParcelStatus::Pending);
        assert_eq!(parcel.current_location, "Vijayawada");
        assert_eq!(parcel.current_route_index, 0);
        assert_eq!(parcel.route.len(), 2);
        assert_eq!(parcel.total_distance, 920);
        assert_eq!(parcel.shipping_price, 920 * 5);
        assert_eq!(parcel.history.len(), 1);
        Ok(())
    }

    #[test]
    fn failed_attempts_do_not_consume_ids() -> anyhow::Result<()> {
        let mut registry = registry();
        assert_eq!(registry.next_id(), 101);
        assert_eq!(registry.register(request("Bangalore", "Hyderabad", 1.0), true)?.id, 101);

        let declined = registry.register(request("Bangalore", "Chennai", 1.0), false);
        assert_eq!(declined.unwrap_err(), ParcelError::PaymentDeclined { price: 900 });
        let unroutable = registry.register(request("Delhi", "Vijayawada", 1.0), true);
        assert!(matches!(unroutable, Err(ParcelError::NoRouteFound { .. })));
        let unknown = registry.register(request("Mumbai", "Delhi", 1.0), true);
        assert_eq!(
            unknown.unwrap_err(),
            ParcelError::InvalidLocation {
                name: "Mumbai".to_string()
            }
        );

        assert_eq!(registry.next_id(), 102);
        assert_eq!(registry.register(request("Chennai", "Delhi", 1.0), true)?.id, 102);
        assert_eq!(registry.len(), 2);
        Ok(())
    }

    #[test]
    fn no_route_creates_nothing() {
        let mut registry = registry();
        let err = registry
            .register(request("Delhi", "Vijayawada", 3.0), true)
            .unwrap_err();
        assert_eq!(
            err,
            ParcelError::NoRouteFound {
                from: "Delhi".to_string(),
                to: "Vijayawada".to_string()
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn identical_endpoints_are_unroutable() {
        let registry = registry();
        let err = registry.quote("Bangalore", "Bangalore", 1.0).unwrap_err();
        assert!(matches!(err, ParcelError::NoRouteFound { .. }));
    }

    #[test]
    fn destination_is_validated() {
        let registry = registry();
        let err = registry.quote("Delhi", "delhi", 1.0).unwrap_err();
        assert_eq!(
            err,
            ParcelError::InvalidLocation {
                name: "delhi".to_string()
            }
        );
    }

    #[test]
    fn quote_matches_registration() -> anyhow::Result<()> {
        let mut registry = registry();
        let quote = registry.quote("Bangalore", "Hyderabad", 50.0)?;
        assert_eq!(quote.route, vec![RouteEdge::new("Bangalore", "Hyderabad", 560)]);
        assert_eq!(quote.price, 5600);
        let parcel = registry.register(request("Bangalore", "Hyderabad", 50.0), true)?;
        assert_eq!(parcel.shipping_price, quote.price);
        Ok(())
    }

    #[test]
    fn rejects_blank_names_and_bad_weights() {
        let mut registry = registry();
        let mut blank = request("Bangalore", "Hyderabad", 1.0);
        blank.receiver = "   ".to_string();
        assert_eq!(
            registry.register(blank, true).unwrap_err(),
            ParcelError::MissingName { field: "receiver" }
        );
        let heavyless = request("Bangalore", "Hyderabad", 0.0);
        assert!(matches!(
            registry.register(heavyless, true),
            Err(ParcelError::InvalidWeight { .. })
        ));
        assert!(registry.is_empty());
        assert_eq!(registry.next_id(), FIRST_PARCEL_ID);
    }

    #[test]
    fn lookup_by_id() -> anyhow::Result<()> {
        let mut registry = registry();
        registry.register(request("Bangalore", "Chennai", 7.0), true)?;
        registry.register(request("Chennai", "Delhi", 7.0), true)?;
        assert_eq!(registry.find_by_id(102)?.destination, "Delhi");
        assert_eq!(
            registry.find_by_id(7).unwrap_err(),
            ParcelError::NotFound { id: 7 }
        );
        let ids: Vec<u32> = registry.list().iter().map(|parcel| parcel.id).collect();
        assert_eq!(ids, vec![101, 102]);
        Ok(())
    }

    #[test]
    fn overlong_route_is_rejected_without_panicking() -> anyhow::Result<()> {
        let config = NetworkConfig {
            locations: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            routes: vec![RouteEdge::new("A", "B", u32::MAX), RouteEdge::new("B", "C", 10)],
        };
        let mut registry =
            ParcelRegistry::new(Arc::new(Network::from_config(&config)?), PricingEngine::default());

        let err = registry.quote("A", "C", 1.0).unwrap_err();
        assert!(matches!(err, ParcelError::InvalidNetwork { .. }));
        assert!(matches!(
            registry.register(request("A", "C", 1.0), true),
            Err(ParcelError::InvalidNetwork { .. })
        ));
        assert!(registry.is_empty());
        assert_eq!(registry.next_id(), FIRST_PARCEL_ID);

        // A single maximal edge still prices, saturating instead of wrapping.
        let quote = registry.quote("A", "B", 1.0)?;
        assert_eq!(quote.total_distance, u32::MAX);
        assert_eq!(quote.price, u32::MAX);
        Ok(())
    }
}

use std::sync::Arc;

use parking_lot::RwLock;

use super::ParcelRegistry;
use crate::{
    delivery::{DeliveryEngine, TickSummary},
    error::Result,
    models::{Parcel, ParcelRequest, Quote},
};

/// Cloneable, lock-guarded registry handle.
///
/// Each mutating call takes the write lock exactly once; reads hand back owned
/// snapshots so no lock is held by the caller.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<ParcelRegistry>>,
}

impl SharedRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: ParcelRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Id the next successful registration will receive.
    pub fn next_id(&self) -> u32 {
        self.inner.read().next_id()
    }

    /// Known location names, in declaration order.
    pub fn location_names(&self) -> Vec<String> {
        self.inner.read().network().locations().names().to_vec()
    }

    /// See [`ParcelRegistry::quote`].
    pub fn quote(&self, source: &str, destination: &str, weight: f64) -> Result<Quote> {
        self.inner.read().quote(source, destination, weight)
    }

    /// See [`ParcelRegistry::register`].
    pub fn register(&self, request: ParcelRequest, payment_confirmed: bool) -> Result<Parcel> {
        let mut registry = self.inner.write();
        registry.register(request, payment_confirmed).cloned()
    }

    /// Snapshot of every parcel in registration order.
    pub fn list(&self) -> Vec<Parcel> {
        self.inner.read().list().to_vec()
    }

    /// Snapshot of a single parcel.
    pub fn find_by_id(&self, id: u32) -> Result<Parcel> {
        self.inner.read().find_by_id(id).cloned()
    }

    /// Number of registered parcels.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the registry holds no parcels.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Advance every parcel by one hop.
    pub fn tick_all(&self) -> TickSummary {
        let mut registry = self.inner.write();
        DeliveryEngine::tick_all(&mut registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::ParcelStatus, network::Network, pricing::PricingEngine};

    #[test]
    fn clones_share_state() -> anyhow::Result<()> {
        let shared = SharedRegistry::new(ParcelRegistry::new(
            Arc::new(Network::default()),
            PricingEngine::default(),
        ));
        let other = shared.clone();
        let parcel = shared.register(
            ParcelRequest {
                sender: "asha".to_string(),
                receiver: "ravi".to_string(),
                weight: 2.0,
                source: "Bangalore".to_string(),
                destination: "Hyderabad".to_string(),
            },
            true,
        )?;
        assert_eq!(other.len(), 1);
        assert_eq!(other.next_id(), 102);

        let summary = other.tick_all();
        assert_eq!(summary.delivered, 1);
        assert_eq!(shared.find_by_id(parcel.id)?.status, ParcelStatus::Delivered);
        assert_eq!(parcel.status, ParcelStatus::Pending);
        Ok(())
    }
}

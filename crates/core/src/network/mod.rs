//! Static shipping network: known locations, directed edges and the router.

/// Directed weighted edges between locations.
pub mod graph;
/// Registry of valid location names.
pub mod locations;
/// Bounded two-hop path search.
pub mod router;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use graph::RouteEdge;
pub use locations::LocationRegistry;
pub use router::Router;

/// Serializable description of the network, loaded once at start-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Valid location names.
    pub locations: Vec<String>,
    /// Edges in declaration order. Order matters for routing.
    pub routes: Vec<RouteEdge>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        let locations = ["Bangalore", "Hyderabad", "Vijayawada", "Chennai", "Delhi"]
            .into_iter()
            .map(String::from)
            .collect();
        let routes = [
            ("Bangalore", "Hyderabad", 560),
            ("Hyderabad", "Vijayawada", 300),
            ("Vijayawada", "Chennai", 520),
            ("Hyderabad", "Bangalore", 560),
            ("Bangalore", "Chennai", 450),
            ("Chennai", "Delhi", 700),
            ("Delhi", "Bangalore", 890),
            ("Chennai", "Bangalore", 400),
        ]
        .into_iter()
        .map(|(from, to, distance)| RouteEdge::new(from, to, distance))
        .collect();
        Self { locations, routes }
    }
}

/// Validated network shared by the registry for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Network {
    locations: LocationRegistry,
    router: Router,
}

impl Network {
    /// Validate the configuration and build the lookup structures.
    pub fn from_config(config: &NetworkConfig) -> Result<Self> {
        let locations = LocationRegistry::new(config.locations.iter().cloned())?;
        let graph = graph::RouteGraph::new(config.routes.clone(), &locations)?;
        Ok(Self {
            locations,
            router: Router::new(graph),
        })
    }

    /// Known locations.
    pub fn locations(&self) -> &LocationRegistry {
        &self.locations
    }

    /// Router over the configured edges.
    pub fn router(&self) -> &Router {
        &self.router
    }
}

impl Default for Network {
    fn default() -> Self {
        let config = NetworkConfig::default();
        let locations = LocationRegistry::from_trusted(config.locations);
        let graph = graph::RouteGraph::from_trusted(config.routes);
        Self {
            locations,
            router: Router::new(graph),
        }
    }
}

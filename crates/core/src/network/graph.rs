use std::fmt;

use serde::{Deserialize, Serialize};

use super::LocationRegistry;
use crate::error::{ParcelError, Result};

/// One directed hop between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEdge {
    /// Origin of the hop.
    pub from: String,
    /// End of the hop.
    pub to: String,
    /// Length in kilometres, always positive.
    pub distance: u32,
}

impl RouteEdge {
    /// Convenience constructor.
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }
}

impl fmt::Display for RouteEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({} km)", self.from, self.to, self.distance)
    }
}

/// Directed edges in declaration order. Not symmetric, not necessarily connected.
#[derive(Debug, Clone)]
pub(crate) struct RouteGraph {
    edges: Vec<RouteEdge>,
}

impl RouteGraph {
    pub(crate) fn new(edges: Vec<RouteEdge>, locations: &LocationRegistry) -> Result<Self> {
        for edge in &edges {
            for endpoint in [&edge.from, &edge.to] {
                if !locations.is_valid(endpoint) {
                    return Err(ParcelError::InvalidNetwork {
                        reason: format!("edge {edge} references unknown location '{endpoint}'"),
                    });
                }
            }
            if edge.distance == 0 {
                return Err(ParcelError::InvalidNetwork {
                    reason: format!("edge {edge} has zero distance"),
                });
            }
        }
        Ok(Self { edges })
    }

    pub(crate) fn from_trusted(edges: Vec<RouteEdge>) -> Self {
        Self { edges }
    }

    /// Edges leaving `from`, in declaration order.
    pub(crate) fn outgoing<'a>(&'a self, from: &'a str) -> impl Iterator<Item = &'a RouteEdge> {
        self.edges.iter().filter(move |edge| edge.from == from)
    }
}

use tracing::debug;

use super::graph::{RouteEdge, RouteGraph};

/// Finds paths of at most two hops through the route graph.
///
/// This is deliberately not a shortest-path search: the first direct edge in
/// declaration order wins, and failing that the first two-edge chain found by
/// walking edges in declaration order. An empty path means "no route".
#[derive(Debug, Clone)]
pub struct Router {
    graph: RouteGraph,
}

impl Router {
    pub(crate) fn new(graph: RouteGraph) -> Self {
        Self { graph }
    }

    /// Path from `source` to `destination`, or an empty vector when none exists.
    pub fn find_route(&self, source: &str, destination: &str) -> Vec<RouteEdge> {
        if let Some(direct) = self
            .graph
            .outgoing(source)
            .find(|edge| edge.to == destination)
        {
            debug!(%source, %destination, distance = direct.distance, "direct route");
            return vec![direct.clone()];
        }

        for first in self.graph.outgoing(source) {
            if let Some(second) = self
                .graph
                .outgoing(&first.to)
                .find(|edge| edge.to == destination)
            {
                debug!(%source, via = %first.to, %destination, "two-hop route");
                return vec![first.clone(), second.clone()];
            }
        }

        debug!(%source, %destination, "no route");
        Vec::new()
    }
}

/// Sum of the edge distances along `route`, or `None` if it overflows `u32`.
pub fn total_distance(route: &[RouteEdge]) -> Option<u32> {
    route
        .iter()
        .try_fold(0u32, |total, edge| total.checked_add(edge.distance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{Network, NetworkConfig};

    fn router() -> Router {
        Network::default().router().clone()
    }

    #[test]
    fn direct_edge_is_returned_alone() {
        let route = router().find_route("Bangalore", "Hyderabad");
        assert_eq!(route, vec![RouteEdge::new("Bangalore", "Hyderabad", 560)]);
    }

    #[test]
    fn routing_is_deterministic() {
        let router = router();
        let first = router.find_route("Hyderabad", "Chennai");
        for _ in 0..10 {
            assert_eq!(router.find_route("Hyderabad", "Chennai"), first);
        }
    }

    #[test]
    fn falls_back_to_two_hops() {
        let route = router().find_route("Vijayawada", "Bangalore");
        assert_eq!(
            route,
            vec![
                RouteEdge::new("Vijayawada", "Chennai", 520),
                RouteEdge::new("Chennai", "Bangalore", 400),
            ]
        );
        assert_eq!(total_distance(&route), Some(920));
    }

    #[test]
    fn first_declared_two_hop_chain_wins() {
        // Hyderabad -> Bangalore -> Chennai also exists, but Hyderabad -> Vijayawada
        // is declared first.
        let route = router().find_route("Hyderabad", "Chennai");
        assert_eq!(
            route,
            vec![
                RouteEdge::new("Hyderabad", "Vijayawada", 300),
                RouteEdge::new("Vijayawada", "Chennai", 520),
            ]
        );
    }

    #[test]
    fn first_declared_direct_edge_wins_over_duplicates() -> anyhow::Result<()> {
        let mut config = NetworkConfig::default();
        config
            .routes
            .push(RouteEdge::new("Bangalore", "Hyderabad", 10));
        let network = Network::from_config(&config)?;
        let route = network.router().find_route("Bangalore", "Hyderabad");
        assert_eq!(route, vec![RouteEdge::new("Bangalore", "Hyderabad", 560)]);
        Ok(())
    }

    #[test]
    fn unreachable_pairs_yield_empty_path() {
        let router = router();
        // Delhi only reaches Bangalore directly, and Bangalore does not reach Vijayawada.
        assert!(router.find_route("Delhi", "Vijayawada").is_empty());
        assert!(router.find_route("Nowhere", "Delhi").is_empty());
    }

    #[test]
    fn total_distance_reports_overflow() {
        let route = vec![
            RouteEdge::new("A", "B", u32::MAX),
            RouteEdge::new("B", "C", 10),
        ];
        assert_eq!(total_distance(&route), None);
        assert_eq!(total_distance(&route[..1]), Some(u32::MAX));
    }

    #[test]
    fn three_hop_paths_are_not_explored() {
        // Vijayawada -> Chennai -> Bangalore -> Hyderabad exists, but needs three hops.
        assert!(router().find_route("Vijayawada", "Hyderabad").is_empty());
    }
}

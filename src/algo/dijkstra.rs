/*!
Single-target shortest path over weighted graphs (Dijkstra).

The algorithm is specified for non-negative weights only; negative weights
silently produce wrong distances (documented precondition, no runtime check).
Tentative distances are `Option<W>` with `None` as "not yet reached", so no
infinity sentinel is needed.
*/

use crate::{
    error::GraphError,
    graph::{GraphKey, KeyedGraph},
    node::*,
    weight::EdgeWeight,
};

impl<K: GraphKey, W: EdgeWeight> KeyedGraph<K, W> {
    /// Computes the weight of the shortest path from `start` to `target` via
    /// Dijkstra's algorithm, returning `Ok(None)` if `target` is unreachable
    /// and `Ok(Some(0))`-equivalent for `start == target`.
    ///
    /// In every round the unvisited vertex with minimum tentative distance is
    /// selected by a linear scan and finalized; as soon as the target itself
    /// is selected its distance is returned (early exit). Neighbors of the
    /// selected vertex are relaxed through it.
    ///
    /// # Precondition
    /// All edge weights must be non-negative; otherwise the result is
    /// unspecified (incorrect, not a crash).
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either endpoint is not in the graph.
    pub fn dijkstra(&self, start: &K, target: &K) -> Result<Option<W>, GraphError<K>> {
        let s = self.require_node(start)?;
        let t = self.require_node(target)?;

        let n = self.len();
        let mut dist: Vec<Option<W>> = vec![None; n];
        let mut finished = vec![false; n];
        dist[s as usize] = Some(W::zero());

        loop {
            let mut closest: Option<(usize, W)> = None;
            for v in 0..n {
                if finished[v] {
                    continue;
                }
                if let Some(d) = dist[v] {
                    if closest.is_none_or(|(_, c)| d < c) {
                        closest = Some((v, d));
                    }
                }
            }

            // queue exhausted without reaching the target
            let Some((v, d)) = closest else {
                return Ok(None);
            };

            if v as Node == t {
                return Ok(Some(d));
            }
            finished[v] = true;

            for &(u, w) in self.adjacency_of(v as Node) {
                let u = u as usize;
                let through = d + w;
                if !finished[u] && dist[u].is_none_or(|c| through < c) {
                    dist[u] = Some(through);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::RandomConnected, graph::WeightedGraph};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn weighted(directed: bool, n: u32, edges: &[(u32, u32, u64)]) -> WeightedGraph<u32, u64> {
        let mut graph = WeightedGraph::new(directed);
        for u in 0..n {
            graph.add_vertex(u);
        }
        for &(u, v, w) in edges {
            assert!(graph.add_edge_with(&u, &v, w));
        }
        graph
    }

    #[test]
    fn distance_to_self_is_zero() {
        let graph = weighted(false, 3, &[(0, 1, 5), (1, 2, 2)]);
        assert_eq!(graph.dijkstra(&0, &0).unwrap(), Some(0));
    }

    #[test]
    fn picks_the_cheaper_detour() {
        // direct edge costs 10, the detour 0 -> 1 -> 2 only 3
        let graph = weighted(false, 3, &[(0, 2, 10), (0, 1, 1), (1, 2, 2)]);
        assert_eq!(graph.dijkstra(&0, &2).unwrap(), Some(3));
    }

    #[test]
    fn unreachable_target_is_absent() {
        let graph = weighted(true, 3, &[(0, 1, 1)]);
        assert_eq!(graph.dijkstra(&0, &2).unwrap(), None);

        // direction matters on directed graphs
        assert_eq!(graph.dijkstra(&1, &0).unwrap(), None);
    }

    #[test]
    fn unknown_endpoints_are_hard_failures() {
        let graph = weighted(false, 2, &[(0, 1, 1)]);
        assert!(matches!(
            graph.dijkstra(&0, &9),
            Err(GraphError::UnknownVertex(9))
        ));
        assert!(graph.dijkstra(&9, &0).is_err());
    }

    /// Cheapest simple path by exhaustive enumeration.
    fn brute_shortest(
        graph: &WeightedGraph<u32, u64>,
        cur: Node,
        target: Node,
        seen: &mut Vec<bool>,
    ) -> Option<u64> {
        if cur == target {
            return Some(0);
        }

        seen[cur as usize] = true;
        let mut best = None;
        for &(v, w) in graph.adjacency_of(cur).iter().collect_vec() {
            if !seen[v as usize] {
                if let Some(d) = brute_shortest(graph, v, target, seen) {
                    let d = d + w;
                    if best.is_none_or(|b| d < b) {
                        best = Some(d);
                    }
                }
            }
        }
        seen[cur as usize] = false;

        best
    }

    #[test]
    fn matches_brute_force_on_small_graphs() {
        let rng = &mut Pcg64::seed_from_u64(4242);

        for _ in 0..10 {
            let graph = RandomConnected::new()
                .nodes(8)
                .extra_edges(10)
                .max_weight(30)
                .generate(rng);
            let n = graph.number_of_nodes();

            for s in 0..n {
                for t in 0..n {
                    let mut seen = vec![false; n as usize];
                    let expected = brute_shortest(&graph, s, t, &mut seen);
                    assert_eq!(graph.dijkstra(&s, &t).unwrap(), expected);
                }
            }
        }
    }
}

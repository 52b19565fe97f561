/*!
Minimum spanning trees over weighted graphs.

Two classic algorithms with different result shapes:
- [Kruskal](KeyedGraph::minimum_spanning_tree_kruskal) returns the selected
  edges as keyed `(source, target, weight)` triples,
- [Prim](KeyedGraph::minimum_spanning_tree_prim) returns only the total
  weight.

Both assume a connected (undirected) graph; on disconnected input Kruskal
produces a spanning forest with fewer than `|V| - 1` edges and Prim sums only
the component of the first inserted vertex. Callers that need the full-graph
guarantees must check connectivity first.
*/

use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    edge::WeightedEdge,
    graph::{GraphKey, KeyedGraph},
    node::*,
    utils::UnionFind,
    weight::EdgeWeight,
};

impl<K: GraphKey, W: EdgeWeight> KeyedGraph<K, W> {
    /// Computes a minimum spanning tree via Kruskal's algorithm and returns
    /// its edges as `(source, target, weight)` triples.
    ///
    /// Every stored edge is collected exactly once (undirected edges are
    /// canonicalized into their normalized direction), sorted ascending by
    /// `(weight, source, target)` for deterministic tie-breaking, and then
    /// greedily selected unless it would close a cycle according to a
    /// union-find over the vertices. Selection stops once `|V| - 1` edges are
    /// in the tree or the edges are exhausted.
    ///
    /// # Precondition
    /// The graph should be connected; otherwise fewer than `|V| - 1` edges
    /// are returned (a minimum spanning forest).
    pub fn minimum_spanning_tree_kruskal(&self) -> Vec<WeightedEdge<K, W>> {
        let mut edges = self.edges(!self.is_directed()).collect_vec();
        edges.sort_by(|a, b| {
            a.2.partial_cmp(&b.2)
                .unwrap_or(Ordering::Equal)
                .then_with(|| (a.0, a.1).cmp(&(b.0, b.1)))
        });

        let mut sets = UnionFind::new(self.number_of_nodes());
        let mut tree = Vec::with_capacity(self.len().saturating_sub(1));

        for (u, v, weight) in edges {
            if tree.len() + 1 == self.len() {
                break;
            }

            if sets.union(u, v) {
                tree.push(WeightedEdge::new(
                    self.key_of(u).clone(),
                    self.key_of(v).clone(),
                    weight,
                ));
            }
        }

        tree
    }

    /// Computes the **total weight** of a minimum spanning tree via Prim's
    /// algorithm. Callers needing the edge list should use
    /// [`KeyedGraph::minimum_spanning_tree_kruskal`] instead.
    ///
    /// Grows the tree from the first inserted vertex: in every round the
    /// cheapest not-yet-included vertex is selected by a linear scan (no
    /// priority queue; the algorithm is O(V^2 + E)) and its neighbors' best
    /// known connecting weights are relaxed downward. `None` plays the role
    /// of an infinite best weight, so no sentinel value is ever summed.
    ///
    /// # Precondition
    /// The graph should be connected; otherwise only the weight of the start
    /// vertex's component is returned.
    pub fn minimum_spanning_tree_prim(&self) -> W {
        let n = self.len();
        let mut total = W::zero();
        if n == 0 {
            return total;
        }

        let mut best: Vec<Option<W>> = vec![None; n];
        let mut included = vec![false; n];
        best[0] = Some(W::zero());

        loop {
            let mut cheapest: Option<(usize, W)> = None;
            for v in 0..n {
                if included[v] {
                    continue;
                }
                if let Some(w) = best[v] {
                    if cheapest.is_none_or(|(_, c)| w < c) {
                        cheapest = Some((v, w));
                    }
                }
            }

            // all remaining vertices are unreachable
            let Some((v, weight)) = cheapest else {
                return total;
            };

            included[v] = true;
            total = total + weight;

            for &(u, w) in self.adjacency_of(v as Node) {
                let u = u as usize;
                if !included[u] && best[u].is_none_or(|c| w < c) {
                    best[u] = Some(w);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::RandomConnected, graph::WeightedGraph};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn weighted(n: u32, edges: &[(u32, u32, u64)]) -> WeightedGraph<u32, u64> {
        let mut graph = WeightedGraph::undirected();
        for u in 0..n {
            graph.add_vertex(u);
        }
        for &(u, v, w) in edges {
            assert!(graph.add_edge_with(&u, &v, w));
        }
        graph
    }

    #[test]
    fn kruskal_small_known_tree() {
        // classic 4-cycle with a heavy chord
        let graph = weighted(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 3), (0, 3, 4), (0, 2, 10)]);

        let tree = graph.minimum_spanning_tree_kruskal();
        assert_eq!(tree.len(), 3);

        let total: u64 = tree.iter().map(|e| e.weight).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn kruskal_has_v_minus_one_edges_for_connected_input() {
        let rng = &mut Pcg64::seed_from_u64(42);

        for n in [2u32, 5, 10, 30] {
            let graph = RandomConnected::new().nodes(n).extra_edges(n).generate(rng);
            let tree = graph.minimum_spanning_tree_kruskal();
            assert_eq!(tree.len(), n as usize - 1);
        }
    }

    #[test]
    fn kruskal_on_disconnected_input_yields_a_forest() {
        let graph = weighted(4, &[(0, 1, 1), (2, 3, 1)]);
        assert_eq!(graph.minimum_spanning_tree_kruskal().len(), 2);
    }

    #[test]
    fn prim_matches_kruskal_total() {
        let rng = &mut Pcg64::seed_from_u64(1337);

        for _ in 0..20 {
            let graph = RandomConnected::new()
                .nodes(12)
                .extra_edges(14)
                .max_weight(50)
                .generate(rng);

            let kruskal: u64 = graph
                .minimum_spanning_tree_kruskal()
                .iter()
                .map(|e| e.weight)
                .sum();
            assert_eq!(graph.minimum_spanning_tree_prim(), kruskal);
        }
    }

    #[test]
    fn prim_of_empty_and_singleton_graphs() {
        let graph = WeightedGraph::<u32, u64>::undirected();
        assert_eq!(graph.minimum_spanning_tree_prim(), 0);

        let graph = weighted(1, &[]);
        assert_eq!(graph.minimum_spanning_tree_prim(), 0);
    }

    /// Brute-force MST weight: try all edge subsets of size `n - 1` and keep
    /// the cheapest spanning one.
    fn brute_mst_weight(graph: &WeightedGraph<u32, u64>) -> Option<u64> {
        let edges = graph.edges(true).collect_vec();
        let n = graph.len();
        let mut best: Option<u64> = None;

        for subset in edges.iter().combinations(n - 1) {
            let mut sets = UnionFind::new(n as u32);
            let mut spanning = true;
            let mut weight = 0;

            for &&(u, v, w) in &subset {
                spanning &= sets.union(u, v);
                weight += w;
            }

            if spanning && best.is_none_or(|b| weight < b) {
                best = Some(weight);
            }
        }

        best
    }

    #[test]
    fn kruskal_matches_brute_force_on_small_graphs() {
        let rng = &mut Pcg64::seed_from_u64(7);

        for _ in 0..10 {
            let graph = RandomConnected::new()
                .nodes(7)
                .extra_edges(8)
                .max_weight(20)
                .generate(rng);

            let kruskal: u64 = graph
                .minimum_spanning_tree_kruskal()
                .iter()
                .map(|e| e.weight)
                .sum();
            assert_eq!(Some(kruskal), brute_mst_weight(&graph));
        }
    }
}

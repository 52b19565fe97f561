/*!
# Graph Generators

Builder-style generators for random keyed graphs, mainly used to drive
randomized property tests. The usual workflow is:

1. Create a generator (e.g. [`RandomGraph::new`]).
2. Set parameters via the builder methods (`.nodes(n).edge_prob(p)`).
3. Call `generate(rng)` with any [`rand::Rng`].

Generated graphs use the dense indices `0..n` as their keys.
*/

use rand::Rng;
use tracing::debug;

use crate::{
    graph::{Graph, WeightedGraph},
    node::*,
};

/// Generator for `G(n,p)`-style random graphs: every possible edge is
/// included independently with probability `p`. Self-loops are not generated.
#[derive(Debug, Copy, Clone)]
pub struct RandomGraph {
    n: NumNodes,
    p: f64,
    directed: bool,
}

impl Default for RandomGraph {
    fn default() -> Self {
        Self {
            n: 0,
            p: 0.5,
            directed: false,
        }
    }
}

impl RandomGraph {
    /// Creates a new generator with `p = 0.5` on an undirected graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of vertices.
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Sets the independent edge probability.
    /// ** Panics in `generate` if not in `[0, 1]` **
    pub fn edge_prob(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    /// Sets whether the generated graph is directed.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Generates a random graph keyed by `0..n`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Graph<NumNodes> {
        assert!((0.0..=1.0).contains(&self.p), "invalid edge probability");

        let mut graph = Graph::new(self.directed);
        for u in 0..self.n {
            graph.add_vertex(u);
        }

        for u in 0..self.n {
            let from = if self.directed { 0 } else { u + 1 };
            for v in from..self.n {
                if u != v && rng.random_bool(self.p) {
                    graph.add_edge(&u, &v);
                }
            }
        }

        debug!(
            n = self.n,
            m = graph.number_of_edges(),
            directed = self.directed,
            "generated random graph"
        );

        graph
    }
}

/// Generator for **connected** random weighted graphs: a random spanning tree
/// (every vertex attaches to a random earlier one) plus a number of extra
/// random edges, all with uniform weights in `1..=max_weight`.
///
/// Connectivity by construction makes these graphs suitable fixtures for the
/// MST algorithms, whose contracts assume connected input.
#[derive(Debug, Copy, Clone)]
pub struct RandomConnected {
    n: NumNodes,
    extra_edges: NumEdges,
    max_weight: u64,
}

impl Default for RandomConnected {
    fn default() -> Self {
        Self {
            n: 0,
            extra_edges: 0,
            max_weight: 10,
        }
    }
}

impl RandomConnected {
    /// Creates a new generator with no extra edges and weights in `1..=10`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of vertices.
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Sets the number of extra-edge insertion attempts beyond the spanning
    /// tree. Attempts hitting an existing edge or a self-loop are dropped, so
    /// this is an upper bound.
    pub fn extra_edges(mut self, m: NumEdges) -> Self {
        self.extra_edges = m;
        self
    }

    /// Sets the maximum edge weight (inclusive).
    pub fn max_weight(mut self, w: u64) -> Self {
        self.max_weight = w;
        self
    }

    /// Generates a connected undirected weighted graph keyed by `0..n`.
    /// ** Panics if `n == 0` **
    pub fn generate<R: Rng>(&self, rng: &mut R) -> WeightedGraph<NumNodes, u64> {
        assert!(self.n > 0, "at least one vertex must be generated");

        let mut graph = WeightedGraph::undirected();
        for u in 0..self.n {
            graph.add_vertex(u);
        }

        for v in 1..self.n {
            let u = rng.random_range(0..v);
            let w = rng.random_range(1..=self.max_weight);
            graph.add_edge_with(&u, &v, w);
        }

        for _ in 0..self.extra_edges {
            let u = rng.random_range(0..self.n);
            let v = rng.random_range(0..self.n);
            if u != v {
                let w = rng.random_range(1..=self.max_weight);
                graph.add_edge_with(&u, &v, w);
            }
        }

        debug!(
            n = self.n,
            m = graph.number_of_edges(),
            "generated random connected graph"
        );

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn random_graph_respects_extreme_probabilities() {
        let rng = &mut Pcg64::seed_from_u64(1);

        let empty = RandomGraph::new().nodes(10).edge_prob(0.0).generate(rng);
        assert_eq!(empty.number_of_edges(), 0);

        let full = RandomGraph::new().nodes(10).edge_prob(1.0).generate(rng);
        assert_eq!(full.number_of_edges(), 45); // 10 choose 2
    }

    #[test]
    fn random_connected_is_connected() {
        let rng = &mut Pcg64::seed_from_u64(2);

        for n in [1u32, 2, 5, 20, 50] {
            let graph = RandomConnected::new().nodes(n).extra_edges(n).generate(rng);
            assert_eq!(graph.connected_components().len(), 1);
            assert!(graph.number_of_edges() >= n - 1);
        }
    }
}

use std::fmt::{Debug, Display};

use crate::node::Node;

/// An edge between two dense node indices.
/// It is up to the user whether an `Edge` is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns true if the endpoint with smaller index comes first.
    /// Used to canonicalize undirected edges so each is counted exactly once.
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }
}

/// A keyed edge triple `(source, target, weight)` as returned to callers,
/// e.g. by Kruskal's minimum spanning tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge<K, W> {
    pub source: K,
    pub target: K,
    pub weight: W,
}

impl<K, W> WeightedEdge<K, W> {
    pub fn new(source: K, target: K, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}

impl<K: Display, W: Display> Display for WeightedEdge<K, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.source, self.target, self.weight)
    }
}

/*!
# Keyed Graph Arena

[`KeyedGraph<K, P>`] owns all vertices of a graph in a single arena: an
insertion-ordered `Vec` of vertex records plus an `FxHashMap` from key to
dense [`Node`] index. Adjacency is stored per vertex as a list of
`(Node, payload)` pairs, i.e. edges are index references resolved through the
arena and never ownership links between vertex records. This sidesteps the
cyclic-ownership problems a pointer-based adjacency structure would have.

The edge-payload parameter `P` unifies the unweighted and weighted graph into
one abstraction:
- [`Graph<K>`] stores `()` per edge,
- [`WeightedGraph<K, W>`] stores a numeric weight (see
  [`EdgeWeight`](crate::weight::EdgeWeight)).

Directedness is fixed at construction. For undirected graphs, inserting the
edge `{u, v}` creates both adjacency entries atomically: either both exist
afterwards or neither does.
*/

use std::fmt::Debug;
use std::hash::Hash;

use fxhash::FxHashMap;

use crate::{edge::Edge, error::GraphError, node::*};

/// Bounds every vertex key has to satisfy: opaque, cheap to copy around,
/// hashable for the arena index and totally ordered for deterministic
/// tie-breaking.
pub trait GraphKey: Clone + Eq + Hash + Ord + Debug {}

impl<K> GraphKey for K where K: Clone + Eq + Hash + Ord + Debug {}

/// A single vertex record inside the arena: its key and its adjacency list.
///
/// A vertex never stores more than one adjacency entry per neighbor:
/// re-adding an existing neighbor is a no-op and the first payload wins.
#[derive(Debug, Clone)]
pub struct Vertex<K, P = ()> {
    key: K,
    adj: Vec<(Node, P)>,
}

impl<K, P> Vertex<K, P> {
    fn new(key: K) -> Self {
        Self {
            key,
            adj: Vec::new(),
        }
    }

    /// Returns the key of this vertex.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the number of (outgoing) neighbors of this vertex.
    pub fn degree(&self) -> NumNodes {
        self.adj.len() as NumNodes
    }

    /// Returns the adjacency entries `(neighbor, payload)` in insertion order.
    pub fn adjacency(&self) -> &[(Node, P)] {
        &self.adj
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.adj.iter().any(|&(w, _)| w == v)
    }
}

/// Directed or undirected graph over opaque keys with per-edge payloads.
#[derive(Debug, Clone)]
pub struct KeyedGraph<K, P = ()> {
    vertices: Vec<Vertex<K, P>>,
    index: FxHashMap<K, Node>,
    directed: bool,
    num_edges: NumEdges,
}

/// An unweighted graph: every edge carries the unit payload.
pub type Graph<K> = KeyedGraph<K, ()>;

/// A weighted graph: every edge carries exactly one weight, supplied at
/// insertion time and immutable afterwards.
pub type WeightedGraph<K, W> = KeyedGraph<K, W>;

impl<K: GraphKey, P> KeyedGraph<K, P> {
    /// Creates an empty graph. `directed` is fixed for the lifetime of the graph.
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            directed,
            num_edges: 0,
        }
    }

    /// Shorthand for [`KeyedGraph::new`] with `directed = true`.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Shorthand for [`KeyedGraph::new`] with `directed = false`.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Returns *true* if edges have an orientation.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of vertices in the graph
    pub fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }

    /// Returns the number of vertices as `usize`
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges. An undirected edge `{u, v}` counts once.
    pub fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    /// Adds a new vertex under `key`.
    /// Returns *false* (and changes nothing) if the key already exists.
    pub fn add_vertex(&mut self, key: K) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }

        let node = self.vertices.len() as Node;
        self.index.insert(key.clone(), node);
        self.vertices.push(Vertex::new(key));
        true
    }

    /// Returns *true* if a vertex with the given key exists.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the dense index of `key`, if present. O(1).
    pub fn node_of(&self, key: &K) -> Option<Node> {
        self.index.get(key).copied()
    }

    /// Resolves `key` to its dense index or fails hard with
    /// [`GraphError::UnknownVertex`]. Entry point of every keyed query.
    pub fn require_node(&self, key: &K) -> Result<Node, GraphError<K>> {
        self.node_of(key)
            .ok_or_else(|| GraphError::UnknownVertex(key.clone()))
    }

    /// Returns the key stored under a dense index.
    /// ** Panics if `u >= n` **
    pub fn key_of(&self, u: Node) -> &K {
        &self.vertices[u as usize].key
    }

    /// Returns the vertex record stored under `key`, if present. O(1).
    pub fn vertex(&self, key: &K) -> Option<&Vertex<K, P>> {
        self.node_of(key).map(|u| &self.vertices[u as usize])
    }

    /// Returns an iterator over all keys in insertion order.
    /// The order is stable within a call (and across calls as the core never
    /// deletes vertices), which keeps traversal tie-breaking reproducible.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.iter().map(|v| &v.key)
    }

    /// Returns an iterator over all vertex records in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<K, P>> + '_ {
        self.vertices.iter()
    }

    /// Returns the range of dense indices `0..n`.
    /// Does not borrow `self` and may be used where additional references
    /// into the arena are needed.
    pub fn nodes(&self) -> std::ops::Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns the adjacency entries of a vertex in insertion order.
    /// ** Panics if `u >= n` **
    pub fn adjacency_of(&self, u: Node) -> &[(Node, P)] {
        &self.vertices[u as usize].adj
    }

    /// Returns an iterator over the (outgoing) neighbors of a vertex.
    /// ** Panics if `u >= n` **
    pub fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.adjacency_of(u).iter().map(|&(v, _)| v)
    }

    /// Returns the number of (outgoing) neighbors of a vertex.
    /// ** Panics if `u >= n` **
    pub fn degree_of(&self, u: Node) -> NumNodes {
        self.vertices[u as usize].degree()
    }

    /// Returns *true* if the edge `(u, v)` is stored.
    /// ** Panics if `u >= n` **
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.vertices[u as usize].has_neighbor(v)
    }

    /// Returns an iterator over the keys of the neighbors of `key`,
    /// or `None` if the key is absent.
    pub fn neighbor_keys_of<'a>(
        &'a self,
        key: &K,
    ) -> Option<impl Iterator<Item = &'a K> + 'a> {
        let u = self.node_of(key)?;
        Some(self.neighbors_of(u).map(|v| self.key_of(v)))
    }
}

impl<K: GraphKey, P: Copy> KeyedGraph<K, P> {
    /// Adds an edge from `from` to `to` carrying `payload`.
    ///
    /// Returns *false* (and stores nothing) if either endpoint is absent or
    /// the edge already exists; the first payload always wins. For undirected
    /// graphs both adjacency entries are created atomically: existence is
    /// checked before either side is touched.
    pub fn add_edge_with(&mut self, from: &K, to: &K, payload: P) -> bool {
        let (Some(u), Some(v)) = (self.node_of(from), self.node_of(to)) else {
            return false;
        };

        if self.vertices[u as usize].has_neighbor(v) {
            return false;
        }

        self.vertices[u as usize].adj.push((v, payload));
        if !self.directed && u != v {
            self.vertices[v as usize].adj.push((u, payload));
        }
        self.num_edges += 1;

        true
    }

    /// Returns an iterator over all stored edges as `(source, target, payload)`.
    ///
    /// With `only_normalized`, only edges `(u, v)` with `u <= v` are yielded,
    /// which canonicalizes the two stored directions of an undirected edge
    /// into a single order-independent representative.
    pub fn edges(&self, only_normalized: bool) -> impl Iterator<Item = (Node, Node, P)> + '_ {
        self.nodes().flat_map(move |u| {
            self.adjacency_of(u)
                .iter()
                .map(move |&(v, p)| (u, v, p))
                .filter(move |&(u, v, _)| !only_normalized || Edge(u, v).is_normalized())
        })
    }
}

impl<K: GraphKey> Graph<K> {
    /// Adds an unweighted edge from `from` to `to`.
    /// Same no-op semantics as [`KeyedGraph::add_edge_with`].
    pub fn add_edge(&mut self, from: &K, to: &K) -> bool {
        self.add_edge_with(from, to, ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn letters(graph: &mut Graph<&str>, keys: &[&'static str]) {
        for k in keys {
            assert!(graph.add_vertex(k));
        }
    }

    #[test]
    fn add_vertex_counts_and_rejects_duplicates() {
        let mut graph = Graph::directed();
        letters(&mut graph, &["a", "b", "c"]);
        assert_eq!(graph.number_of_nodes(), 3);

        assert!(!graph.add_vertex("b"));
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.keys().copied().collect_vec(), ["a", "b", "c"]);
    }

    #[test]
    fn keys_keep_insertion_order() {
        let mut graph = Graph::undirected();
        letters(&mut graph, &["x", "d", "a", "m"]);
        assert_eq!(graph.keys().copied().collect_vec(), ["x", "d", "a", "m"]);
    }

    #[test]
    fn add_edge_rejects_unknown_endpoints() {
        let mut graph = Graph::directed();
        letters(&mut graph, &["a", "b"]);

        assert!(!graph.add_edge(&"a", &"z"));
        assert!(!graph.add_edge(&"z", &"a"));
        assert_eq!(graph.number_of_edges(), 0);

        assert!(graph.add_edge(&"a", &"b"));
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let mut graph = Graph::undirected();
        letters(&mut graph, &["a", "b", "c"]);
        graph.add_edge(&"a", &"b");
        graph.add_edge(&"b", &"c");

        for (u, v, _) in graph.edges(false).collect_vec() {
            assert!(graph.has_edge(v, u));
        }
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn duplicate_edge_is_a_noop_and_first_weight_wins() {
        let mut graph = WeightedGraph::undirected();
        graph.add_vertex("a");
        graph.add_vertex("b");

        assert!(graph.add_edge_with(&"a", &"b", 3u64));
        assert!(!graph.add_edge_with(&"a", &"b", 7u64));
        // undirected storage: re-adding the reverse direction is a duplicate too
        assert!(!graph.add_edge_with(&"b", &"a", 9u64));

        let edges = graph.edges(true).collect_vec();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].2, 3);
    }

    #[test]
    fn directed_adjacency_is_one_way() {
        let mut graph = Graph::directed();
        letters(&mut graph, &["a", "b"]);
        graph.add_edge(&"a", &"b");

        let a = graph.node_of(&"a").unwrap();
        let b = graph.node_of(&"b").unwrap();
        assert!(graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut graph = Graph::undirected();
        graph.add_vertex("a");
        graph.add_edge(&"a", &"a");

        let a = graph.node_of(&"a").unwrap();
        assert_eq!(graph.degree_of(a), 1);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn require_node_fails_on_unknown_key() {
        let graph = Graph::<&str>::directed();
        assert!(matches!(
            graph.require_node(&"missing"),
            Err(crate::error::GraphError::UnknownVertex("missing"))
        ));
    }

    #[test]
    fn normalized_edges_cover_each_undirected_edge_once() {
        let mut graph = Graph::undirected();
        letters(&mut graph, &["a", "b", "c"]);
        graph.add_edge(&"a", &"b");
        graph.add_edge(&"b", &"c");
        graph.add_edge(&"a", &"c");

        assert_eq!(graph.edges(false).count(), 6);
        assert_eq!(graph.edges(true).count(), 3);
    }

    #[test]
    fn neighbor_keys_resolve_through_the_arena() {
        let mut graph = Graph::directed();
        letters(&mut graph, &["a", "b", "c"]);
        graph.add_edge(&"a", &"b");
        graph.add_edge(&"a", &"c");

        let neighbors = graph.neighbor_keys_of(&"a").unwrap().copied().collect_vec();
        assert_eq!(neighbors, ["b", "c"]);
        assert!(graph.neighbor_keys_of(&"z").is_none());
    }
}

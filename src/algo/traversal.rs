/*!
Graph traversal and traversal-derived queries.

This module provides:
- A generic explicit-frontier traversal iterator ([`TraversalSearch`]) that
  turns into BFS or DFS depending on the frontier container
  (`VecDeque` -> queue -> BFS, `Vec` -> stack -> DFS).
- Keyed convenience queries on [`KeyedGraph`]: BFS order, DFS path search,
  minimum-hop shortest path, and vertices at an exact hop distance.

Every traversal carries its own per-run state (visited set, frontier) and is
read-only over the graph. There is no recursion anywhere, so stack depth is
never a concern even for graphs with a huge diameter.
*/

use std::collections::VecDeque;

use fxhash::FxHashMap;

use crate::{error::GraphError, graph::*, node::*};

/// One step of a traversal: the vertex visited, its parent in the traversal
/// tree (`None` for the start vertex) and its depth below the start.
///
/// For BFS, `depth` is the minimum hop distance from the start; for DFS it is
/// merely the length of the tree path taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub node: Node,
    pub parent: Option<Node>,
    pub depth: NumNodes,
}

impl Visit {
    fn root(node: Node) -> Self {
        Self {
            node,
            parent: None,
            depth: 0,
        }
    }

    fn child(parent: &Visit, node: Node) -> Self {
        Self {
            node,
            parent: Some(parent.node),
            depth: parent.depth + 1,
        }
    }
}

/// Abstraction over the traversal frontier. The container determines the
/// traversal order:
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait Frontier {
    /// Pushes a pending visit into the frontier.
    fn push(&mut self, visit: Visit);

    /// Removes and returns the next visit.
    fn pop(&mut self) -> Option<Visit>;

    /// Returns the number of pending visits.
    fn cardinality(&self) -> usize;
}

impl Frontier for VecDeque<Visit> {
    fn push(&mut self, visit: Visit) {
        self.push_back(visit)
    }
    fn pop(&mut self) -> Option<Visit> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl Frontier for Vec<Visit> {
    fn push(&mut self, visit: Visit) {
        Vec::push(self, visit)
    }
    fn pop(&mut self) -> Option<Visit> {
        Vec::pop(self)
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier of pending [`Visit`]s and a set of already
/// discovered nodes. A vertex is marked discovered when it enters the
/// frontier, so every reachable vertex is yielded exactly once.
pub struct TraversalSearch<'a, K, P, F> {
    graph: &'a KeyedGraph<K, P>,
    visited: NodeSet,
    frontier: F,
    stop_at: Option<Node>,
}

/// A breadth-first traversal iterator: visits reachable vertices in
/// non-decreasing hop distance from the start.
pub type Bfs<'a, K, P> = TraversalSearch<'a, K, P, VecDeque<Visit>>;

/// A depth-first traversal iterator using an explicit stack.
pub type Dfs<'a, K, P> = TraversalSearch<'a, K, P, Vec<Visit>>;

impl<'a, K: GraphKey, P, F: Frontier + Default> TraversalSearch<'a, K, P, F> {
    /// Creates a new traversal starting at the dense index `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a KeyedGraph<K, P>, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());

        let mut visited = NodeSet::default();
        visited.insert(start);

        let mut frontier = F::default();
        frontier.push(Visit::root(start));

        Self {
            graph,
            visited,
            frontier,
            stop_at: None,
        }
    }
}

impl<'a, K: GraphKey, P, F: Frontier> TraversalSearch<'a, K, P, F> {
    /// Sets a stopper vertex: once it is yielded, the traversal ends.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Excludes a vertex from the search as if it had already been visited.
    /// Has no effect on vertices that are already in the frontier, so call
    /// this directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.insert(u);
    }

    /// Tries to restart the exhausted search at a yet unvisited vertex
    /// (scanning in insertion order) and returns *true* iff successful.
    /// Requires that the search came to a hold, i.e. `next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert_eq!(self.frontier.cardinality(), 0);

        match self.graph.nodes().find(|u| !self.visited.contains(u)) {
            None => false,
            Some(u) => {
                self.visited.insert(u);
                self.frontier.push(Visit::root(u));
                true
            }
        }
    }
}

impl<'a, K: GraphKey, P, F: Frontier> Iterator for TraversalSearch<'a, K, P, F> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.frontier.pop()?;

        if self.stop_at == Some(visit.node) {
            while self.frontier.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(visit.node) {
                if self.visited.insert(v) {
                    self.frontier.push(Visit::child(&visit, v));
                }
            }
        }

        Some(visit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.frontier.cardinality();

        // pending visits are already in the visited set; a stopper may drop
        // all of them, so only without one are they guaranteed to be yielded
        let lower = if self.stop_at.is_some() { 0 } else { pending };
        let upper = pending + (self.graph.len() - self.visited.len());

        (lower, Some(upper))
    }
}

impl<K: GraphKey, P> KeyedGraph<K, P> {
    /// Returns a BFS iterator from `start`, visiting every reachable vertex
    /// exactly once in non-decreasing hop distance.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `start` is not in the graph.
    pub fn bfs(&self, start: &K) -> Result<Bfs<'_, K, P>, GraphError<K>> {
        Ok(Bfs::new(self, self.require_node(start)?))
    }

    /// Returns a DFS iterator from `start` using an explicit stack.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `start` is not in the graph.
    pub fn dfs(&self, start: &K) -> Result<Dfs<'_, K, P>, GraphError<K>> {
        Ok(Dfs::new(self, self.require_node(start)?))
    }

    /// Returns the keys of all vertices reachable from `start` in BFS order.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `start` is not in the graph.
    pub fn bfs_order(&self, start: &K) -> Result<Vec<K>, GraphError<K>> {
        Ok(self
            .bfs(start)?
            .map(|visit| self.key_of(visit.node).clone())
            .collect())
    }

    /// Computes a minimum-hop-count path from `start` to `target` via BFS,
    /// inclusive of both endpoints.
    ///
    /// Returns `Ok(None)` if `target` is unreachable. Among equal-length
    /// paths, the one discovered first under the adjacency insertion order
    /// wins.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either endpoint is not in the graph.
    pub fn shortest_path(&self, start: &K, target: &K) -> Result<Option<Vec<K>>, GraphError<K>> {
        let s = self.require_node(start)?;
        let t = self.require_node(target)?;
        Ok(self.tree_path::<VecDeque<Visit>>(s, t))
    }

    /// Searches for *some* path from `start` to `target` via stack-based DFS,
    /// inclusive of both endpoints. The result is the DFS-tree path, which is
    /// **not** guaranteed to be shortest; only its existence is meaningful.
    ///
    /// Returns `Ok(None)` if `target` is unreachable.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if either endpoint is not in the graph.
    pub fn dfs_path(&self, start: &K, target: &K) -> Result<Option<Vec<K>>, GraphError<K>> {
        let s = self.require_node(start)?;
        let t = self.require_node(target)?;
        Ok(self.tree_path::<Vec<Visit>>(s, t))
    }

    /// Runs a traversal from `s` with the given frontier and reconstructs the
    /// traversal-tree path to `t` from the recorded parents.
    fn tree_path<F: Frontier + Default>(&self, s: Node, t: Node) -> Option<Vec<K>> {
        if s == t {
            return Some(vec![self.key_of(s).clone()]);
        }

        let mut parent: FxHashMap<Node, Node> = FxHashMap::default();

        for visit in TraversalSearch::<'_, K, P, F>::new(self, s).stop_at(t) {
            if let Some(p) = visit.parent {
                parent.insert(visit.node, p);
            }

            if visit.node == t {
                let mut path = vec![t];
                let mut node = t;
                while node != s {
                    node = *parent.get(&node).unwrap();
                    path.push(node);
                }

                path.reverse();
                return Some(path.into_iter().map(|u| self.key_of(u).clone()).collect());
            }
        }

        None
    }

    /// Returns the keys of all vertices whose minimum hop distance from
    /// `start` is **exactly** `distance`. A vertex discovered earlier via a
    /// shorter path is attributed that shorter distance only.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if `start` is not in the graph.
    pub fn vertices_at_distance(
        &self,
        start: &K,
        distance: NumNodes,
    ) -> Result<Vec<K>, GraphError<K>> {
        let mut result = Vec::new();

        for visit in self.bfs(start)? {
            if visit.depth > distance {
                break;
            }
            if visit.depth == distance {
                result.push(self.key_of(visit.node).clone());
            }
        }

        Ok(result)
    }
}

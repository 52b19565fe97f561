/*!
Connectivity queries: connected components, strongly connected components
(Tarjan) and cycle detection.

Both component algorithms are iterators that emit one component at a time and
keep all bookkeeping per run; nothing is ever stored in the graph itself.
*/

use std::iter::FusedIterator;

use itertools::Itertools;

use crate::{
    algo::traversal::Bfs,
    graph::{GraphKey, KeyedGraph},
    node::*,
};

/// Iterator over the connected components of a graph, one `Vec<Node>` at a
/// time. Internally restarts a single BFS at the first unvisited vertex until
/// every vertex has been assigned, so the components partition the full
/// vertex set exactly once.
///
/// # Directed graphs
/// Reachability follows the adjacency **as stored**, even when the graph is
/// directed. This does not compute weakly connected components (edges are not
/// symmetrized first); for undirected graphs it coincides with the standard
/// notion.
pub struct ConnectedComponents<'a, K, P> {
    bfs: Option<Bfs<'a, K, P>>,
}

impl<'a, K: GraphKey, P> ConnectedComponents<'a, K, P> {
    pub fn new(graph: &'a KeyedGraph<K, P>) -> Self {
        Self {
            bfs: (!graph.is_empty()).then(|| Bfs::new(graph, 0)),
        }
    }
}

impl<'a, K: GraphKey, P> Iterator for ConnectedComponents<'a, K, P> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        let bfs = self.bfs.as_mut()?;

        loop {
            let component = bfs.by_ref().map(|visit| visit.node).collect_vec();
            if !component.is_empty() {
                return Some(component);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

impl<'a, K: GraphKey, P> FusedIterator for ConnectedComponents<'a, K, P> {}

/// Per-vertex bookkeeping of one Tarjan run.
#[derive(Debug, Clone, Copy, Default)]
struct SccState {
    visited: bool,
    on_stack: bool,
    index: Node,
    low_link: Node,
}

impl SccState {
    fn enter(&mut self, index: Node) {
        debug_assert!(!self.visited);
        self.index = index;
        self.low_link = index;
        self.visited = true;
        self.on_stack = true;
    }

    fn try_lower_link(&mut self, l: Node) {
        if l < self.low_link {
            self.low_link = l;
        }
    }

    fn is_root(&self) -> bool {
        self.index == self.low_link
    }
}

/// A simulated recursive call of the depth-first search: the vertex, its
/// parent, a cursor into its adjacency list, and the path-stack length at
/// entry.
#[derive(Debug, Clone, Copy)]
struct SccFrame {
    node: Node,
    parent: Node,
    cursor: usize,
    stack_base: usize,
    first_visit: bool,
    has_loop: bool,
}

impl SccFrame {
    fn new(node: Node, parent: Node) -> Self {
        Self {
            node,
            parent,
            cursor: 0,
            stack_base: 0,
            first_visit: true,
            has_loop: false,
        }
    }
}

/// Implementation of Tarjan's algorithm for strongly connected components,
/// designed as an iterator that emits the vertices of one component at a
/// time. The first vertex of each emitted component is its root (the vertex
/// whose low-link equals its own discovery index); components themselves
/// appear in reverse topological order of the condensed graph.
///
/// Tarjan's algorithm is typically described recursively. That design cannot
/// easily pause between components and overflows the call stack on deep
/// graphs, so the recursion is simulated with an explicit stack of
/// [`SccFrame`]s: on first visit a vertex gets a discovery index and the same
/// low-link, then its neighbors are processed one cursor step at a time.
/// Whenever a neighbor is still on the path stack, its low-link is folded
/// into the current vertex's. A vertex whose low-link still equals its own
/// index after all neighbors are done closes a component: everything above it
/// on the path stack is popped and emitted.
pub struct StronglyConnectedComponents<'a, K, P> {
    graph: &'a KeyedGraph<K, P>,
    idx: Node,

    states: Vec<SccState>,
    potentially_unvisited: usize,

    path_stack: Vec<Node>,
    call_stack: Vec<SccFrame>,

    /// Set when the most recently emitted component closed over a self-loop.
    last_had_loop: bool,
}

impl<'a, K: GraphKey, P> StronglyConnectedComponents<'a, K, P> {
    pub fn new(graph: &'a KeyedGraph<K, P>) -> Self {
        Self {
            graph,
            idx: 0,
            states: vec![Default::default(); graph.len()],
            potentially_unvisited: 0,
            path_stack: Vec::with_capacity(32),
            call_stack: Vec::with_capacity(32),
            last_had_loop: false,
        }
    }

    /// Returns *true* if the component emitted by the last call to `next()`
    /// contained a self-loop on its root-search path. Together with the
    /// component size this classifies the component as cyclic.
    pub fn last_component_had_loop(&self) -> bool {
        self.last_had_loop
    }

    /// Scans for an untouched vertex (in insertion order) to start the next
    /// depth-first search tree, just like in a classic spanning-forest DFS.
    fn next_unvisited_node(&mut self) -> Option<Node> {
        while self.potentially_unvisited < self.graph.len() {
            if !self.states[self.potentially_unvisited].visited {
                let v = self.potentially_unvisited as Node;
                self.call_stack.push(SccFrame::new(v, v));
                return Some(v);
            }

            self.potentially_unvisited += 1;
        }
        None
    }

    /// Resumes the paused depth-first search and runs it until either a
    /// component closes (returned) or the current search tree is exhausted.
    fn search(&mut self) -> Option<Vec<Node>> {
        'recurse: while let Some(frame_idx) = self.call_stack.len().checked_sub(1) {
            let frame = &mut self.call_stack[frame_idx];
            let v = frame.node;

            if frame.first_visit {
                frame.first_visit = false;
                frame.stack_base = self.path_stack.len();

                self.states[v as usize].enter(self.idx);
                self.idx += 1;

                self.path_stack.push(v);
            }

            let adj = self.graph.adjacency_of(v);
            while frame.cursor < adj.len() {
                let w = adj[frame.cursor].0;
                frame.cursor += 1;
                frame.has_loop |= w == v;

                let w_state = self.states[w as usize];
                if !w_state.visited {
                    self.call_stack.push(SccFrame::new(w, v));
                    continue 'recurse;
                } else if w_state.on_stack {
                    self.states[v as usize].try_lower_link(w_state.low_link);
                }
            }

            let frame = *frame;
            self.call_stack.pop();

            let state = self.states[v as usize];
            self.states[frame.parent as usize].try_lower_link(state.low_link);

            if state.is_root() {
                let component = self.path_stack.drain(frame.stack_base..).collect_vec();
                for &w in &component {
                    self.states[w as usize].on_stack = false;
                }

                debug_assert_eq!(component.first().copied(), Some(v));

                self.last_had_loop = frame.has_loop;
                return Some(component);
            }
        }

        None
    }
}

impl<'a, K: GraphKey, P> Iterator for StronglyConnectedComponents<'a, K, P> {
    type Item = Vec<Node>;

    /// Returns either a vector of vertices forming an SCC or `None` if every
    /// vertex has been assigned to a component.
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(component) = self.search() {
                return Some(component);
            }

            self.next_unvisited_node()?;
        }
    }
}

impl<'a, K: GraphKey, P> FusedIterator for StronglyConnectedComponents<'a, K, P> {}

impl<K: GraphKey, P> KeyedGraph<K, P> {
    /// Partitions all vertices into connected components, each a list of
    /// keys. Every vertex appears in exactly one component; component order
    /// and member order follow the traversal and are stable across calls.
    ///
    /// Reachability follows adjacency as stored: for directed graphs this is
    /// **not** weak connectivity (see [`ConnectedComponents`]).
    pub fn connected_components(&self) -> Vec<Vec<K>> {
        ConnectedComponents::new(self)
            .map(|component| {
                component
                    .into_iter()
                    .map(|u| self.key_of(u).clone())
                    .collect()
            })
            .collect()
    }

    /// Computes the strongly connected components via Tarjan's algorithm.
    /// Every vertex belongs to exactly one component; a component with more
    /// than one vertex (or a self-looped singleton) witnesses a cycle.
    pub fn strongly_connected_components(&self) -> Vec<Vec<K>> {
        StronglyConnectedComponents::new(self)
            .map(|component| {
                component
                    .into_iter()
                    .map(|u| self.key_of(u).clone())
                    .collect()
            })
            .collect()
    }

    /// Returns *true* if the graph contains a cycle, exiting as soon as the
    /// first cyclic component closes. A single vertex with a self-loop counts
    /// as a cycle.
    pub fn contains_cycle(&self) -> bool {
        let mut sccs = StronglyConnectedComponents::new(self);

        while let Some(component) = sccs.next() {
            if component.len() > 1 || sccs.last_component_had_loop() {
                return true;
            }
        }

        false
    }
}

/// Sorts the vertices in each component and then the components themselves
/// lexicographically. Handy for comparing against expected partitions.
pub fn sort_components<K: Ord>(mut components: Vec<Vec<K>>) -> Vec<Vec<K>> {
    components.iter_mut().for_each(|c| c.sort_unstable());
    components.sort();
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::RandomGraph, graph::Graph};
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn graph_from_edges(directed: bool, n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
        let mut graph = Graph::new(directed);
        for u in 0..n {
            graph.add_vertex(u);
        }
        for &(u, v) in edges {
            assert!(graph.add_edge(&u, &v));
        }
        graph
    }

    #[test]
    fn components_partition_the_vertex_set() {
        let graph = graph_from_edges(false, 7, &[(1, 2), (2, 3), (4, 5)]);

        let components = graph.connected_components();
        let mut all = components.iter().flatten().copied().collect_vec();
        all.sort_unstable();
        assert_eq!(all, (0..7).collect_vec());

        let sorted = sort_components(components);
        assert_eq!(sorted, vec![vec![0], vec![1, 2, 3], vec![4, 5], vec![6]]);
    }

    #[test]
    fn components_of_empty_graph() {
        let graph = Graph::<u32>::undirected();
        assert!(graph.connected_components().is_empty());
    }

    #[test]
    fn undirected_example_is_one_cyclic_component() {
        // a-b, a-c, b-c, b-d, c-d, c-e, d-e, d-f, e-f
        let graph = graph_from_edges(
            false,
            6,
            &[
                (0, 1),
                (0, 2),
                (1, 2),
                (1, 3),
                (2, 3),
                (2, 4),
                (3, 4),
                (3, 5),
                (4, 5),
            ],
        );

        let components = graph.connected_components();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 6);
        assert!(graph.contains_cycle());
    }

    #[test]
    fn scc_known_graph() {
        let graph = graph_from_edges(
            true,
            8,
            &[
                (0, 1),
                (1, 2),
                (1, 4),
                (1, 5),
                (2, 6),
                (2, 3),
                (3, 2),
                (3, 7),
                (4, 0),
                (4, 5),
                (5, 6),
                (6, 5),
                (7, 3),
                (7, 6),
            ],
        );

        let sccs = sort_components(graph.strongly_connected_components());
        assert_eq!(sccs, vec![vec![0, 1, 4], vec![2, 3, 7], vec![5, 6]]);
    }

    #[test]
    fn scc_soundness_on_mixed_graph() {
        // {0,1} and {4,5} are scc pairs, 2 is a loop, 3 is a singleton
        let graph = graph_from_edges(true, 6, &[(0, 1), (1, 0), (2, 2), (4, 5), (5, 4)]);

        let sccs = sort_components(graph.strongly_connected_components());
        assert_eq!(sccs, vec![vec![0, 1], vec![2], vec![3], vec![4, 5]]);
    }

    #[test]
    fn scc_of_directed_tree_is_all_singletons() {
        let graph = graph_from_edges(true, 7, &[(0, 1), (1, 2), (1, 3), (1, 4), (3, 5), (3, 6)]);

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.len(), 7);
        assert!(!graph.contains_cycle());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let graph = graph_from_edges(true, 1, &[(0, 0)]);
        assert!(graph.contains_cycle());

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs, vec![vec![0]]);
    }

    #[test]
    fn dag_on_five_vertices_is_acyclic() {
        let graph = graph_from_edges(true, 5, &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)]);
        assert!(!graph.contains_cycle());
    }

    #[test]
    fn triangle_is_a_cycle() {
        let graph = graph_from_edges(true, 3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(graph.contains_cycle());

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), 3);
    }

    #[test]
    fn scc_partition_covers_random_graphs() {
        let rng = &mut Pcg64::seed_from_u64(1234);

        for i in 0..10 {
            let n = 500;
            let graph = RandomGraph::new()
                .nodes(n)
                .edge_prob(0.5 / n as f64 * i as f64)
                .directed(true)
                .generate(rng);

            let assigned: usize = StronglyConnectedComponents::new(&graph)
                .map(|c| c.len())
                .sum();
            assert_eq!(assigned, n as usize);
        }
    }

    #[test]
    fn scc_survives_very_deep_stacks() {
        // a single directed cycle through all vertices
        let n: u32 = 10_000;
        let mut graph = Graph::directed();
        for u in 0..n {
            graph.add_vertex(u);
        }
        for u in 0..n {
            graph.add_edge(&u, &((u + 1) % n));
        }

        let sccs = graph.strongly_connected_components();
        assert_eq!(sccs.len(), 1);
        assert_eq!(sccs[0].len(), n as usize);
        assert!(graph.contains_cycle());
    }

    #[test]
    fn mutual_reachability_matches_components() {
        let rng = &mut Pcg64::seed_from_u64(999);
        let graph = RandomGraph::new()
            .nodes(9)
            .edge_prob(0.25)
            .directed(true)
            .generate(rng);

        let sccs = graph.strongly_connected_components();
        let mut component_of = vec![usize::MAX; graph.len()];
        for (i, scc) in sccs.iter().enumerate() {
            for key in scc {
                component_of[graph.node_of(key).unwrap() as usize] = i;
            }
        }

        let reaches = |s: u32, t: u32| {
            graph
                .bfs(&s)
                .unwrap()
                .any(|visit| visit.node == graph.node_of(&t).unwrap())
        };

        for u in 0..graph.number_of_nodes() {
            for v in 0..graph.number_of_nodes() {
                let same = component_of[u as usize] == component_of[v as usize];
                let mutual = reaches(u, v) && reaches(v, u);
                assert_eq!(same, mutual, "vertices {u} and {v}");
            }
        }
    }
}

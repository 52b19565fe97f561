/*!
`kgraphs` is a graph data structure & algorithms library designed for graphs whose
vertices carry **keys**: small dynamic graphs built up vertex by vertex and addressed
by application-level identifiers (strings, numbers, anything hashable and ordered)
rather than by preassigned indices.

# Representation

A [`KeyedGraph`](graph::KeyedGraph) stores its vertices in an insertion-ordered arena
and maps every key to a dense internal index of type [`Node`](node::Node) (`u32`).
Algorithms run on the dense indices and translate back to keys at the API boundary.

One graph type covers all four combinations of directed/undirected and
unweighted/weighted: the edge payload is a type parameter, `()` for unweighted graphs
and an [`EdgeWeight`](weight::EdgeWeight) for weighted ones. The aliases
[`Graph<K>`](graph::Graph) and [`WeightedGraph<K, W>`](graph::WeightedGraph) name the
two common instantiations.

### Directed vs Undirected

Both orientations are supported by the same type, chosen at construction:

- In an **undirected** graph, inserting an edge `{u, v}` records it in the adjacency
  of both endpoints.
- In a **directed** graph, the edge has orientation, so `(u, v)` and `(v, u)` are
  distinct.

# Design

Algorithms are provided as configurable iterator structs (e.g.
[`TraversalSearch`](algo::TraversalSearch)) following the *Builder* / *Setter*
pattern. The common operations are additionally implemented as methods on the graph
itself, usable without configuring anything beforehand.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, weights, and the graph types,
- [`algo`] includes the algorithms: BFS/DFS (`graph.bfs(&start)`), shortest paths,
  connected and strongly connected components, cycle detection, minimum spanning trees,
- [`gens`] includes random graph generators, mainly used as test fixtures,
- [`io`] includes a reader for the plain text graph format and a DOT writer,
- [`utils`] includes helper structures such as the union-find forest.

In most use-cases, `use kgraphs::prelude::*;` suffices for your needs.

```
use kgraphs::prelude::*;

let mut graph = Graph::directed();
for key in ["a", "b", "c", "d"] {
    graph.add_vertex(key);
}
graph.add_edge(&"a", &"b");
graph.add_edge(&"b", &"c");
graph.add_edge(&"a", &"c");

assert_eq!(
    graph.shortest_path(&"a", &"c").unwrap(),
    Some(vec!["a", "c"])
);
assert!(!graph.contains_cycle());
assert_eq!(graph.shortest_path(&"a", &"d").unwrap(), None);
```

# When to use
You should only use this library if the following apply:
- Your vertices are naturally addressed by keys and graphs are built dynamically
- You require only classical graph functionality

For large static graphs or a wider algorithm portfolio, check out
[petgraph](https://crates.io/crates/petgraph).
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod graph;
pub mod io;
pub mod node;
pub mod utils;
pub mod weight;

/// `kgraphs::prelude` includes definitions for nodes, edges, errors, weights, and the graph types.
pub mod prelude {
    pub use super::{edge::*, error::*, graph::*, node::*, weight::*};
}

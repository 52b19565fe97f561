/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of [`KeyedGraph`](crate::graph::KeyedGraph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use kgraphs::algo::*;
```
Where possible, algorithms are provided as **iterators** ([`Bfs`], [`Dfs`],
[`ConnectedComponents`], ...), making it easy to consume results lazily; the
most common uses are additionally exposed as methods on the graph itself
(`graph.bfs(&start)`, `graph.contains_cycle()`, `graph.dijkstra(&s, &t)`, ...).
*/

mod connectivity;
mod dijkstra;
mod mst;
mod traversal;

pub use connectivity::*;
pub use traversal::*;

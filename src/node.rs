/*!
# Node Representation

Externally, vertices are identified by opaque keys (see [`GraphKey`](crate::graph::GraphKey)).
Internally, the arena assigns every key a dense index in `0..n` the moment it is
inserted, and all algorithm bookkeeping (visited sets, low-links, parent maps,
disjoint sets) runs over these indices.

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
This saves space compared to `usize`/`u64` and keeps per-run state compact.
*/

use fxhash::FxHashSet;

/// Dense index of a vertex inside the arena, in the range `0..n`.
pub type Node = u32;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumNodes = Node;

/// We limit the number of edges to `2^32 - 1` as well.
pub type NumEdges = u32;

/// Sparse set of nodes, used as the visited set of traversals.
pub type NodeSet = FxHashSet<Node>;

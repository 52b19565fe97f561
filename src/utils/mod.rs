/*!
# Utilities

Helper structures shared by the algorithms, currently the
[`UnionFind`](self::union_find::UnionFind) disjoint-set forest backing
Kruskal's minimum spanning tree.
*/

pub mod union_find;

pub use union_find::UnionFind;

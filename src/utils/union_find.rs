/*!
# Union-Find

A disjoint-set forest over dense node indices, tracking a partition of
`0..n` into sets. Used by Kruskal's algorithm to test whether an edge would
close a cycle. The structure is ephemeral: one instance per algorithm run.

Following parent pointers from any index always terminates at a root; `union`
only ever re-parents a root, so the parent relation stays acyclic.
*/

use crate::node::*;

/// Disjoint-set forest with iterative find and path compression.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
}

impl UnionFind {
    /// Creates `n` singleton sets: every index is its own parent.
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Returns the representative root of the set containing `u`.
    /// Compresses the visited path onto the root.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // second pass: point everything on the path directly at the root
        let mut node = u;
        while node != root {
            node = std::mem::replace(&mut self.parent[node as usize], root);
        }

        root
    }

    /// Merges the sets of `a` and `b` by re-parenting `find(a)`'s root onto
    /// `find(b)`'s root. Returns *true* iff the two were in different sets.
    /// Calling this redundantly is not an error.
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        self.parent[root_a as usize] = root_b;
        true
    }

    /// Returns *true* if `a` and `b` are currently in the same set.
    pub fn in_same_set(&mut self, a: Node, b: Node) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut sets = UnionFind::new(5);
        for u in 0..5 {
            assert_eq!(sets.find(u), u);
        }
    }

    #[test]
    fn union_merges_and_reports() {
        let mut sets = UnionFind::new(4);

        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.in_same_set(0, 2));

        assert!(sets.union(1, 2));
        assert!(sets.in_same_set(0, 3));

        // redundant union is a no-op, not an error
        assert!(!sets.union(0, 3));
    }

    #[test]
    fn find_terminates_after_chained_unions() {
        let mut sets = UnionFind::new(100);
        for u in 0..99 {
            sets.union(u, u + 1);
        }

        let root = sets.find(0);
        for u in 0..100 {
            assert_eq!(sets.find(u), root);
        }
    }
}

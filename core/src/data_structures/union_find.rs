//! Union-Find (disjoint-set) with path compression and union by rank
//!
//! Array-backed over dense node indices, owned by a single MST run. The
//! amortized cost per operation is O(α(n)), effectively constant.

use crate::algorithm::traits::NodeId;

/// Disjoint-set forest over elements `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointers for each element.
    parent: Vec<usize>,
    /// Rank (approximate depth) of each tree.
    rank: Vec<usize>,
    /// Number of disjoint sets.
    components: usize,
}

impl UnionFind {
    /// Creates a structure of `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the representative of the set containing `x`, compressing
    /// the path so repeated queries are idempotent and cheap.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let i = x.as_usize();
        if self.parent[i] != i {
            let root = self.find(NodeId(self.parent[i]));
            self.parent[i] = root.as_usize();
        }
        NodeId(self.parent[i])
    }

    /// Unions the sets containing `x` and `y` by rank. Returns `false`
    /// (no-op) if they are already unified — the would-be cycle signal
    /// Kruskal keys on.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find(x).as_usize();
        let root_y = self.find(y).as_usize();

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.components -= 1;
        true
    }

    /// True if both elements currently share a representative.
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets remaining.
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_merges_and_detects_cycles() {
        let mut uf = UnionFind::new(5);

        assert_eq!(uf.components(), 5);
        assert!(!uf.connected(NodeId(0), NodeId(1)));

        assert!(uf.union(NodeId(0), NodeId(1)));
        assert_eq!(uf.components(), 4);
        assert!(uf.connected(NodeId(0), NodeId(1)));

        // Second union of the same pair is the cycle signal.
        assert!(!uf.union(NodeId(0), NodeId(1)));
        assert_eq!(uf.components(), 4);

        assert!(uf.union(NodeId(2), NodeId(3)));
        assert!(uf.union(NodeId(1), NodeId(2)));
        assert_eq!(uf.components(), 2);
        assert!(uf.connected(NodeId(0), NodeId(3)));
    }

    #[test]
    fn find_is_idempotent_after_compression() {
        let mut uf = UnionFind::new(4);
        uf.union(NodeId(0), NodeId(1));
        uf.union(NodeId(1), NodeId(2));

        let root = uf.find(NodeId(2));
        assert_eq!(uf.find(NodeId(2)), root);
        assert_eq!(uf.find(root), root);
    }
}

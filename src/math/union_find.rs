/// Disjoint-set forest with path compression.
///
/// Unions attach the larger root under the smaller one, so the
/// representative of a set is always its lowest member index and the
/// final grouping does not depend on the order of `union` calls.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Creates a forest of `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    /// Returns the representative (lowest member index) of the set
    /// containing `x`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Compress the path walked
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }
        if root_a < root_b {
            self.parent[root_b] = root_a;
        } else {
            self.parent[root_a] = root_b;
        }
    }

    /// Number of elements in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the forest holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_representatives() {
        let mut uf = UnionFind::new(4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn union_merges_sets() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 2);
        assert_eq!(uf.find(0), uf.find(2));
        assert_ne!(uf.find(0), uf.find(1));
    }

    #[test]
    fn representative_is_lowest_member() {
        let mut uf = UnionFind::new(5);
        uf.union(4, 3);
        uf.union(3, 1);
        assert_eq!(uf.find(4), 1);
        assert_eq!(uf.find(3), 1);
    }

    #[test]
    fn grouping_is_order_independent() {
        let mut forward = UnionFind::new(4);
        forward.union(0, 1);
        forward.union(1, 2);

        let mut backward = UnionFind::new(4);
        backward.union(1, 2);
        backward.union(0, 1);

        for i in 0..4 {
            assert_eq!(forward.find(i), backward.find(i));
        }
    }

    #[test]
    fn transitive_chain_collapses() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        uf.union(1, 2);
        assert_eq!(uf.find(2), 0);
    }
}

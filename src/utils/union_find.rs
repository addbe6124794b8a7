//! Union-Find (Disjoint Set) over the nodes `0..n`.
//!
//! Uses path compression and union by rank for near O(1) amortized operations.

use super::*;

/// Union-Find data structure with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers (`parent[i] == i` for roots)
    parent: Vec<Node>,
    /// Upper bound on the height of each root's tree
    rank: Vec<u8>,
    num_components: NumNodes,
}

impl DisjointSet {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n as usize],
            num_components: n,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn num_components(&self) -> NumNodes {
        self.num_components
    }

    /// Returns the representative of `x`'s set and compresses the path to it.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Merges the sets of `x` and `y`.
    /// Returns *true* iff they were in different sets before.
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let rx = self.rank[root_x as usize];
        let ry = self.rank[root_y as usize];

        if rx < ry {
            self.parent[root_x as usize] = root_y;
        } else if rx > ry {
            self.parent[root_y as usize] = root_x;
        } else {
            self.parent[root_y as usize] = root_x;
            self.rank[root_x as usize] += 1;
        }

        self.num_components -= 1;
        true
    }

    /// Returns *true* iff `x` and `y` are in the same set
    pub fn connected(&mut self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }
}

use super::*;

/// Cycle detection in undirected graphs
pub trait CycleDetection: AdjacencyList {
    /// Returns *true* if the undirected graph contains a cycle.
    ///
    /// Runs an iterative DFS over every component that remembers each vertex's parent: reaching an
    /// already visited vertex other than the parent closes a cycle. Every copy of the edge back to
    /// the parent is skipped, so parallel edges alone are no cycle; self-loops are.
    ///
    /// Fails with [`GraphError::RequiresUndirected`] on directed graphs.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let mut g = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// assert!(g.has_cycle().unwrap());
    ///
    /// g.try_remove_edge(3, 0).unwrap();
    /// assert!(!g.has_cycle().unwrap());
    /// ```
    fn has_cycle(&self) -> Result<bool> {
        self.require_undirected()?;

        let mut visited = self.vertex_bitset_unset();
        let mut stack: Vec<DfsFrame> = Vec::new();

        for root in self.vertices() {
            if visited.set_bit(root) {
                continue;
            }
            stack.push(DfsFrame::new(root, None));

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;
                let Some(&v) = self.as_neighbors_slice(u).get(frame.cursor) else {
                    stack.pop();
                    continue;
                };
                frame.cursor += 1;

                if frame.parent == Some(v) {
                    continue;
                }

                if visited.set_bit(v) {
                    trace!(u, v, "edge closes a cycle");
                    return Ok(true);
                }

                stack.push(DfsFrame::new(v, Some(u)));
            }
        }

        Ok(false)
    }
}

impl<G: AdjacencyList> CycleDetection for G {}

/// Explicit DFS stack entry: the vertex, its parent and the next neighbor to inspect.
/// Also remembers whether one copy of the edge to the parent was already passed over.
pub(super) struct DfsFrame {
    pub node: Node,
    pub parent: Option<Node>,
    pub cursor: usize,
    parent_edge_skipped: bool,
}

impl DfsFrame {
    pub fn new(node: Node, parent: Option<Node>) -> Self {
        Self {
            node,
            parent,
            cursor: 0,
            parent_edge_skipped: false,
        }
    }

    /// Returns *true* exactly once for the first edge back to the parent
    pub fn is_parent_edge(&mut self, v: Node) -> bool {
        if self.parent == Some(v) && !self.parent_edge_skipped {
            self.parent_edge_skipped = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn four_cycle() {
        let mut graph = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        assert!(graph.has_cycle().unwrap());

        graph.try_remove_edge(3, 0).unwrap();
        assert!(!graph.has_cycle().unwrap());
    }

    #[test]
    fn forest_has_no_cycle() {
        let graph = AdjGraph::from_edges(7, false, [(0, 1), (0, 2), (2, 3), (4, 5)]).unwrap();
        assert!(!graph.has_cycle().unwrap());
        assert!(!AdjGraph::try_new(3, false).unwrap().has_cycle().unwrap());
    }

    #[test]
    fn cycle_in_later_component() {
        let graph = AdjGraph::from_edges(6, false, [(0, 1), (3, 4), (4, 5), (5, 3)]).unwrap();
        assert!(graph.has_cycle().unwrap());
    }

    #[test]
    fn loops_are_cycles() {
        let graph = AdjGraph::from_edges(3, false, [(0, 1), (2, 2)]).unwrap();
        assert!(graph.has_cycle().unwrap());

        let graph = AdjGraph::from_edges(3, false, [(0, 1), (1, 2), (2, 2)]).unwrap();
        assert!(graph.has_cycle().unwrap());
    }

    #[test]
    fn parallel_edges_are_no_cycle() {
        let graph = AdjGraph::from_edges(2, false, [(0, 1), (0, 1)]).unwrap();
        assert!(!graph.has_cycle().unwrap());

        let graph = AdjGraph::from_edges(3, false, [(0, 1), (1, 2), (2, 1), (1, 2)]).unwrap();
        assert!(!graph.has_cycle().unwrap());

        let graph = AdjGraph::from_edges(3, false, [(0, 1), (1, 2), (2, 1), (2, 0)]).unwrap();
        assert!(graph.has_cycle().unwrap());
    }

    #[test]
    fn directed_graph_is_rejected() {
        let graph = AdjGraph::from_edges(2, true, [(0, 1)]).unwrap();
        assert!(matches!(graph.has_cycle(), Err(GraphError::RequiresUndirected)));
    }

    #[test]
    fn deep_path_does_not_overflow_the_stack() {
        let n = MAX_NUM_NODES;
        let mut graph = AdjGraph::try_new(n, false).unwrap();
        graph.try_add_edges((1..n).map(|u| (u - 1, u))).unwrap();
        assert!(!graph.has_cycle().unwrap());

        graph.try_add_edge(n - 1, 0).unwrap();
        assert!(graph.has_cycle().unwrap());
    }

    #[test]
    fn randomized_against_edge_count() {
        let rng = &mut Pcg64Mcg::seed_from_u64(37);

        for _ in 0..200 {
            let n = rng.random_range(1..30);
            let m = rng.random_range(0..n + 2);
            let graph = random_graph(rng, n, m, false);

            // parallel edges collapse; the rest is a forest iff m = n - #components
            let edges = graph.edges();
            let mut components = DisjointSet::new(n);
            for &Edge(u, v) in &edges {
                components.union(u, v);
            }
            let forest_edges = (n - components.num_components()) as usize;

            assert_eq!(graph.has_cycle().unwrap(), edges.len() > forest_edges);
        }
    }
}

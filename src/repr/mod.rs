/*!
# Graph Store

[`AdjGraph`] owns `n` vertices `0..n` and one [`ArrNeighborhood`] per vertex.
The number of vertices is fixed at creation, as is directedness; afterwards the graph is
only changed through [`GraphEdgeEditing`].

Invariant: every stored neighbor is `< n`. This is enforced when edges are inserted, so
algorithms never need to re-check adjacency entries.
*/

use crate::{ops::*, *};

mod neighborhood;

pub use neighborhood::*;

/// Adjacency-list graph with a directedness flag fixed at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjGraph {
    nbs: Vec<ArrNeighborhood>,
    num_edges: NumEdges,
    directed: bool,
}

impl AdjGraph {
    /// Creates an empty graph with `n` singleton nodes.
    ///
    /// Fails if `n == 0` or `n > MAX_NUM_NODES`.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::prelude::*;
    ///
    /// let graph = AdjGraph::try_new(3, false).unwrap();
    /// assert_eq!(graph.number_of_nodes(), 3);
    /// assert!(AdjGraph::try_new(0, false).is_err());
    /// ```
    pub fn try_new(n: NumNodes, directed: bool) -> Result<Self> {
        Self::try_new_with_limit(n, directed, MAX_NUM_NODES)
    }

    /// Like [`AdjGraph::try_new`] but with a custom ceiling for the number of nodes
    pub fn try_new_with_limit(n: NumNodes, directed: bool, max_nodes: NumNodes) -> Result<Self> {
        if n == 0 || n > max_nodes {
            return Err(GraphError::InvalidNodeCount {
                requested: n as u64,
                max: max_nodes,
            });
        }

        Ok(Self {
            nbs: vec![ArrNeighborhood::default(); n as usize],
            num_edges: 0,
            directed,
        })
    }

    /// Creates a graph with `n` nodes and inserts all given edges in order
    pub fn from_edges(
        n: NumNodes,
        directed: bool,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> Result<Self> {
        let mut graph = Self::try_new(n, directed)?;
        graph.try_add_edges(edges)?;
        Ok(graph)
    }

    /// Returns the degree of `u` or an error if `u` is out of range
    pub fn degree(&self, u: Node) -> Result<NumNodes> {
        self.validate_node(u)?;
        Ok(self.degree_of(u))
    }

    /// Returns a fresh copy of all adjacency lists, independent of the graph
    pub fn adjacency_lists(&self) -> Vec<Vec<Node>> {
        self.nbs.iter().map(|nbs| nbs.as_slice().to_vec()).collect()
    }
}

impl GraphNodeOrder for AdjGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl GraphType for AdjGraph {
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl AdjacencyList for AdjGraph {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        self.nbs[u as usize].as_slice()
    }
}

impl GraphEdgeEditing for AdjGraph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.validate_node(u)?;
        self.validate_node(v)?;

        self.nbs[u as usize].try_reserve_one()?;
        self.nbs[u as usize].add_neighbor(v);

        if !self.directed && u != v {
            // the mirror entry must exist whenever the first one does
            if let Err(err) = self.nbs[v as usize].try_reserve_one() {
                self.nbs[u as usize].undo_add_neighbor(v);
                return Err(err);
            }
            self.nbs[v as usize].add_neighbor(u);
        }

        self.num_edges += 1;
        Ok(())
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.validate_node(u)?;
        self.validate_node(v)?;

        let pos_u = self.nbs[u as usize]
            .position_of(v)
            .ok_or(GraphError::EdgeNotFound(Edge(u, v)))?;

        if !self.directed && u != v {
            let pos_v = self.nbs[v as usize]
                .position_of(u)
                .ok_or(GraphError::MirrorEdgeMissing(Edge(u, v)))?;
            self.nbs[v as usize].remove_at(pos_v);
        }

        self.nbs[u as usize].remove_at(pos_u);
        self.num_edges -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::random_graph;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn graph_new() {
        for n in 1..50 {
            let graph = AdjGraph::try_new(n, false).unwrap();

            assert_eq!(graph.number_of_edges(), 0);
            assert_eq!(graph.number_of_nodes(), n);
            assert_eq!(graph.vertices().collect::<Vec<_>>(), (0..n).collect::<Vec<_>>());
        }

        assert!(matches!(
            AdjGraph::try_new(0, true),
            Err(GraphError::InvalidNodeCount { requested: 0, .. })
        ));
        assert!(AdjGraph::try_new(MAX_NUM_NODES, true).is_ok());
        assert!(AdjGraph::try_new(MAX_NUM_NODES + 1, true).is_err());
        assert!(AdjGraph::try_new_with_limit(5, true, 4).is_err());
    }

    #[test]
    fn undirected_insertion_is_symmetric() {
        let mut graph = AdjGraph::try_new(3, false).unwrap();
        graph.try_add_edge(0, 1).unwrap();
        graph.try_add_edge(2, 0).unwrap();
        graph.try_add_edge(0, 1).unwrap();

        assert_eq!(graph.as_neighbors_slice(0), &[1, 2, 1]);
        assert_eq!(graph.as_neighbors_slice(1), &[0, 0]);
        assert_eq!(graph.as_neighbors_slice(2), &[0]);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.degree(0).unwrap(), 3);
    }

    #[test]
    fn self_loop_is_stored_once() {
        let mut graph = AdjGraph::try_new(2, false).unwrap();
        graph.try_add_edge(1, 1).unwrap();
        assert_eq!(graph.as_neighbors_slice(1), &[1]);

        graph.try_remove_edge(1, 1).unwrap();
        assert!(graph.as_neighbors_slice(1).is_empty());
        assert!(graph.is_singleton_graph());
    }

    #[test]
    fn out_of_range_edges_are_rejected() {
        let mut graph = AdjGraph::try_new(3, false).unwrap();
        assert!(matches!(
            graph.try_add_edge(0, 3),
            Err(GraphError::InvalidNode { node: 3, num_nodes: 3 })
        ));
        assert!(graph.try_add_edge(7, 0).is_err());
        assert!(graph.try_remove_edge(0, 5).is_err());
        assert!(graph.degree(3).is_err());
        assert!(graph.is_singleton_graph());
        assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
    }

    #[test]
    fn remove_missing_edge() {
        let mut graph = AdjGraph::from_edges(3, true, [(0, 1)]).unwrap();
        assert!(matches!(
            graph.try_remove_edge(1, 0),
            Err(GraphError::EdgeNotFound(Edge(1, 0)))
        ));
        graph.try_remove_edge(0, 1).unwrap();
        assert!(graph.try_remove_edge(0, 1).is_err());
    }

    #[test]
    fn missing_mirror_leaves_graph_untouched() {
        let mut graph = AdjGraph::from_edges(3, false, [(0, 1), (1, 2)]).unwrap();
        // corrupt the mirror entry of {0, 1} to emulate a half-inserted edge
        let pos = graph.nbs[1].position_of(0).unwrap();
        graph.nbs[1].remove_at(pos);
        let before = graph.clone();

        assert!(matches!(
            graph.try_remove_edge(0, 1),
            Err(GraphError::MirrorEdgeMissing(Edge(0, 1)))
        ));
        assert_eq!(graph, before);
    }

    #[test]
    fn remove_edge_is_stable_and_mirrored() {
        let mut graph = AdjGraph::from_edges(4, false, [(0, 1), (0, 2), (0, 3), (2, 1)]).unwrap();
        graph.try_remove_edge(2, 0).unwrap();

        assert_eq!(graph.as_neighbors_slice(0), &[1, 3]);
        assert_eq!(graph.as_neighbors_slice(2), &[1]);
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn add_then_remove_restores_adjacency() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for directed in [false, true] {
            for _ in 0..50 {
                let n = rng.random_range(2..30);
                let mut graph = random_graph(rng, n, 3 * n, directed);
                let before = graph.clone();

                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                graph.try_add_edge(u, v).unwrap();
                graph.try_remove_edge(u, v).unwrap();

                // the new entry sits behind all older copies, so only an older copy is removed
                // when (u, v) already existed; the multiset of neighbors is always restored
                for w in graph.vertices() {
                    let mut a = graph.as_neighbors_slice(w).to_vec();
                    let mut b = before.as_neighbors_slice(w).to_vec();
                    a.sort_unstable();
                    b.sort_unstable();
                    assert_eq!(a, b);
                }
                assert_eq!(graph.number_of_edges(), before.number_of_edges());
            }
        }
    }

    #[test]
    fn add_then_remove_fresh_edge_restores_order() {
        let mut graph = AdjGraph::from_edges(5, false, [(0, 1), (0, 3), (3, 4), (1, 4)]).unwrap();
        let before = graph.clone();

        graph.try_add_edge(0, 4).unwrap();
        graph.try_remove_edge(0, 4).unwrap();
        assert_eq!(graph, before);

        graph.try_add_edge(4, 0).unwrap();
        graph.try_remove_edge(0, 4).unwrap();
        assert_eq!(graph, before);
    }

    #[test]
    fn adjacency_lists_are_a_detached_copy() {
        let mut graph = AdjGraph::from_edges(3, false, [(1, 0), (1, 2), (2, 2)]).unwrap();
        let mut lists = graph.adjacency_lists();
        assert_eq!(lists, vec![vec![1], vec![0, 2], vec![1, 2]]);

        lists[1].clear();
        assert_eq!(graph.as_neighbors_slice(1), &[0, 2]);

        graph.try_remove_edge(1, 0).unwrap();
        assert_eq!(lists[0], vec![1]);
        assert_eq!(graph.adjacency_lists(), vec![vec![], vec![2], vec![1, 2]]);
    }

    #[test]
    fn edges_are_deduplicated() {
        let graph = AdjGraph::from_edges(4, false, [(1, 0), (0, 1), (2, 3), (3, 3), (3, 2)]).unwrap();
        assert_eq!(graph.edges(), vec![Edge(0, 1), Edge(2, 3), Edge(3, 3)]);

        let digraph = AdjGraph::from_edges(3, true, [(1, 0), (0, 1), (0, 1)]).unwrap();
        assert_eq!(digraph.edges(), vec![Edge(0, 1), Edge(0, 1), Edge(1, 0)]);
    }

    #[test]
    fn randomized_edges_exactly_once() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..30 {
            let n = rng.random_range(1..40);
            let graph = random_graph(rng, n, 4 * n, false);

            let edges = graph.edges();
            let mut expected: Vec<Edge> = graph
                .vertices()
                .flat_map(|u| graph.edges_of(u))
                .map(|e| e.normalized())
                .collect();
            expected.sort_unstable();
            expected.dedup();

            assert!(edges.iter().all(|e| e.is_normalized()));
            assert_eq!(graph.ordered_edges(), expected);
            assert_eq!(edges.len(), expected.len());
        }
    }
}

/*!
# Minimum Spanning Trees

Kruskal's algorithm over a [`DisjointSet`]: edges are sorted by ascending weight
(stably, so equal weights keep their enumeration order) and greedily accepted whenever
they connect two different components.

A spanning tree only exists if exactly `n - 1` edges are accepted; otherwise the graph is
disconnected and [`GraphError::Disconnected`] is returned instead of a partial forest.

Edge directions are ignored: a directed graph is treated as its underlying undirected graph.
*/

use super::*;

/// A spanning tree as the list of accepted edges in acceptance order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    pub total_weight: Weight,
    pub edges: Vec<WeightedEdge>,
}

/// Computes a minimum spanning tree of the nodes `0..n` with Kruskal's algorithm.
///
/// Fails if `n == 0`, if an endpoint is `>= n`, if the edges do not connect all nodes,
/// or if the total weight overflows.
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, algo::*};
///
/// let tree = kruskal(4, [(0, 1, 4), (1, 2, 1), (2, 3, 2), (3, 0, 3), (0, 2, 5)]).unwrap();
/// assert_eq!(tree.total_weight, 6);
/// assert_eq!(tree.edges.len(), 3);
/// ```
pub fn kruskal(
    n: NumNodes,
    edges: impl IntoIterator<Item = impl Into<WeightedEdge>>,
) -> Result<SpanningTree> {
    if n == 0 {
        return Err(GraphError::InvalidNodeCount {
            requested: 0,
            max: MAX_NUM_NODES,
        });
    }

    let mut edges: Vec<WeightedEdge> = edges.into_iter().map(|e| e.into()).collect();
    for e in &edges {
        for node in [e.u, e.v] {
            if node >= n {
                return Err(GraphError::InvalidNode { node, num_nodes: n });
            }
        }
    }
    edges.sort_by_key(|e| e.weight);

    let target = n as usize - 1;
    let mut components = DisjointSet::new(n);
    let mut tree = SpanningTree {
        total_weight: 0,
        edges: Vec::with_capacity(target),
    };

    for e in edges {
        if tree.edges.len() == target {
            break;
        }

        if components.union(e.u, e.v) {
            tree.total_weight = tree
                .total_weight
                .checked_add(e.weight)
                .ok_or(GraphError::CapacityOverflow)?;
            tree.edges.push(e);
        }
    }

    if tree.edges.len() < target {
        let root = components.find(0);
        let reached = (0..n).filter(|&u| components.find(u) == root).count() as NumNodes;
        debug!(
            accepted = tree.edges.len(),
            components = components.num_components(),
            "no spanning tree"
        );
        return Err(GraphError::Disconnected {
            reached,
            num_nodes: n,
        });
    }

    Ok(tree)
}

/// Spanning trees of the graph itself
pub trait SpanningTrees: AdjacencyList {
    /// Computes a minimum spanning tree where every edge has weight `1`.
    /// Parallel edges of an undirected graph are considered once.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// let tree = g.kruskal_mst().unwrap();
    /// assert_eq!(tree.total_weight, 3);
    /// assert_eq!(tree.edges.len(), 3);
    /// ```
    fn kruskal_mst(&self) -> Result<SpanningTree> {
        self.kruskal_mst_by(|_| 1)
    }

    /// Computes a minimum spanning tree where the weight of each edge is given by `weight`
    fn kruskal_mst_by<F>(&self, mut weight: F) -> Result<SpanningTree>
    where
        F: FnMut(Edge) -> Weight,
    {
        kruskal(
            self.number_of_nodes(),
            self.edges().into_iter().map(|e| e.with_weight(weight(e))),
        )
    }
}

impl<G: AdjacencyList> SpanningTrees for G {}

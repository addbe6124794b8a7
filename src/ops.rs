use std::ops::Range;

use fxhash::FxHashSet;
use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// The range does not borrow self and hence may be used while mutating the graph.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `Err(GraphError::InvalidNode)` if `u >= n`
    fn validate_node(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node: u,
                num_nodes: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph (undirected edges count once)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Directedness is fixed when a graph is created
pub trait GraphType {
    fn is_directed(&self) -> bool;

    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }

    /// Returns `Err(GraphError::RequiresDirected)` for undirected graphs
    fn require_directed(&self) -> Result<()> {
        if self.is_directed() {
            Ok(())
        } else {
            Err(GraphError::RequiresDirected)
        }
    }

    /// Returns `Err(GraphError::RequiresUndirected)` for directed graphs
    fn require_undirected(&self) -> Result<()> {
        if self.is_undirected() {
            Ok(())
        } else {
            Err(GraphError::RequiresUndirected)
        }
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphType + Sized {
    /// Returns the neighbors of a given vertex in insertion order (duplicates included).
    /// ** Panics if `u >= n` **
    ///
    /// For directed graphs these are the out-neighbors.
    fn as_neighbors_slice(&self, u: Node) -> &[Node];

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.as_neighbors_slice(u).iter().copied()
    }

    /// Returns the number of (outgoing) adjacency entries of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.as_neighbors_slice(u).len() as NumNodes
    }

    /// Returns an iterator over the degrees of all nodes
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns the in-degree of every node
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.len()];
        for v in self.vertices().flat_map(|u| self.neighbors_of(u)) {
            in_degs[v as usize] += 1;
        }
        in_degs
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns the deduplicated list of all edges.
    ///
    /// Directed graphs report every adjacency entry once as `(source, target)`.
    /// Undirected graphs report every edge exactly once as `(min, max)`, regardless of
    /// the order in which its endpoints were inserted; parallel copies collapse to one.
    fn edges(&self) -> Vec<Edge> {
        if self.is_directed() {
            return self.vertices().flat_map(|u| self.edges_of(u)).collect();
        }

        let n = self.number_of_nodes() as u64;
        let mut processed = FxHashSet::default();
        self.vertices()
            .flat_map(|u| self.edges_of(u))
            .map(|e| e.normalized())
            .filter(|&Edge(u, v)| processed.insert(u as u64 * n + v as u64))
            .collect()
    }

    /// Returns all edges in sorted order
    fn ordered_edges(&self) -> Vec<Edge> {
        self.edges().into_iter().sorted().collect()
    }
}

/// Trait to test existence of edges
pub trait AdjacencyTest: AdjacencyList {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.as_neighbors_slice(u).contains(&v)
    }
}

impl<G: AdjacencyList> AdjacencyTest for G {}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing {
    /// Adds the edge `(u, v)` to the graph.
    /// Fails if either endpoint is out of range; the graph is unchanged in that case.
    fn try_add_edge(&mut self, u: Node, v: Node) -> Result<()>;

    /// Adds all edges in the collection and stops at the first failure
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the first occurrence of edge `(u, v)`.
    /// Fails if the edge is not present; the graph is unchanged in that case.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<()>;
}

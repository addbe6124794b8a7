/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Traversal iterators for breadth-first ([`Bfs`]) and depth-first ([`Dfs`]) search.
- Topological ordering of directed acyclic graphs via Kahn's algorithm ([`TopoSearch`]).
- A high-level [`Traversal`] trait that exposes these algorithms directly as methods
  on graph data structures.

Iterators are lazy; the `*_order` methods collect them into freshly allocated vectors.
Vertices unreachable from the start are simply never yielded; a partial order is not an error.
*/

use super::*;
use std::collections::VecDeque;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
///
/// Nodes are marked as visited when they are enqueued, and neighbors are
/// explored in adjacency-list order.
pub struct Bfs<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G: AdjacencyList> Bfs<'a, G> {
    fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Returns *true* if `u` was already discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G: AdjacencyList> Iterator for Bfs<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.graph.len()),
        )
    }
}

/// A DFS traversal iterator using an explicit stack.
///
/// A node is marked as visited when it is *popped*; all of its yet unvisited neighbors are then
/// pushed in adjacency-list order. As the stack is LIFO, the neighbor added last is explored first,
/// i.e. neighbors are explored in reverse adjacency order. A node may sit on the stack several
/// times but is yielded at most once.
pub struct Dfs<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<Node>,
}

impl<'a, G: AdjacencyList> Dfs<'a, G> {
    fn new(graph: &'a G, start: Node) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: vec![start],
        }
    }

    /// Returns *true* if `u` was already yielded
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G: AdjacencyList> Iterator for Dfs<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.stack.pop()?;
            if self.visited.set_bit(u) {
                continue;
            }

            for v in self.graph.neighbors_of(u) {
                if !self.visited.get_bit(v) {
                    self.stack.push(v);
                }
            }

            return Some(u);
        }
    }
}

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
///
/// Uses Kahn's algorithm:
/// - Initializes a FIFO ready queue with all nodes of in-degree 0 (in index order).
/// - Repeatedly removes a node, decreasing in-degrees of its successors,
///   and enqueues new nodes of in-degree 0.
/// - Stops once all nodes are output or only nodes on (or behind) cycles remain.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    ready: VecDeque<Node>,
}

impl<'a, G: AdjacencyList> TopoSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();
        let ready = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();

        Self {
            graph,
            in_degs,
            ready,
        }
    }
}

impl<G: AdjacencyList> Iterator for TopoSearch<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.ready.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.ready.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ready.len(), Some(self.graph.len()))
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order)
pub trait Traversal: AdjacencyList {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// Fails if `start` is out of range.
    fn bfs(&self, start: Node) -> Result<Bfs<'_, Self>> {
        self.validate_node(start)?;
        Ok(Bfs::new(self, start))
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// Fails if `start` is out of range.
    fn dfs(&self, start: Node) -> Result<Dfs<'_, Self>> {
        self.validate_node(start)?;
        Ok(Dfs::new(self, start))
    }

    /// Returns the BFS visit order from `start`.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, false, [(0, 1), (0, 2), (1, 3)]).unwrap();
    /// assert_eq!(g.bfs_order(0).unwrap(), vec![0, 1, 2, 3]);
    /// ```
    fn bfs_order(&self, start: Node) -> Result<Vec<Node>> {
        Ok(self.bfs(start)?.collect())
    }

    /// Returns the DFS visit order from `start`.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, false, [(0, 1), (0, 2), (1, 3)]).unwrap();
    /// assert_eq!(g.dfs_order(0).unwrap(), vec![0, 2, 1, 3]);
    /// ```
    fn dfs_order(&self, start: Node) -> Result<Vec<Node>> {
        Ok(self.dfs(start)?.collect())
    }

    /// Returns an iterator yielding nodes in a valid **topological order**.
    /// Terminates early if the graph contains a cycle.
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns a topological order of a directed graph.
    ///
    /// Fails with [`GraphError::RequiresDirected`] for undirected graphs and with
    /// [`GraphError::NotAcyclic`] if some node never reaches in-degree zero.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(3, true, [(0, 1), (1, 2), (0, 2)]).unwrap();
    /// assert_eq!(g.topological_sort().unwrap(), vec![0, 1, 2]);
    /// ```
    fn topological_sort(&self) -> Result<Vec<Node>> {
        self.require_directed()?;

        let order: Vec<Node> = self.topo_search().collect();
        if order.len() == self.len() {
            Ok(order)
        } else {
            debug!(
                ordered = order.len(),
                num_nodes = self.len(),
                "topological sort stopped at a cycle"
            );
            Err(GraphError::NotAcyclic)
        }
    }

    /// Returns `true` if the directed graph is **acyclic**.
    fn is_acyclic(&self) -> Result<bool> {
        self.require_directed()?;
        Ok(self.topo_search().count() == self.len())
    }
}

impl<G> Traversal for G where G: AdjacencyList {}

/*!
# Eulerian Paths

Hierholzer's algorithm for undirected (multi-)graphs. An Eulerian path uses every edge exactly once;
it exists iff all edges lie in one component and zero or two vertices have odd degree. In the latter
case the path must start at one of the two odd vertices and ends at the other; otherwise it is a circuit.

A self-loop contributes `2` to the degree of its vertex.
*/

use super::*;

pub trait EulerianPath: AdjacencyList + GraphEdgeOrder {
    /// Computes an Eulerian path starting at `start`.
    ///
    /// The path is built on a private copy of the adjacency lists using an explicit stack; unused
    /// edges are taken in adjacency-list order. Returns the visited vertices, i.e. `m + 1` entries.
    ///
    /// # Errors
    /// - [`GraphError::RequiresUndirected`] on directed graphs,
    /// - [`GraphError::InvalidNode`] if `start` is out of range,
    /// - [`GraphError::InvalidEulerStart`] if there are two odd vertices and `start` is neither,
    /// - [`GraphError::NoEulerianPath`] if more than two vertices have odd degree or the edges
    ///   are not connected.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// assert_eq!(g.hierholzer_eulerian_path(0).unwrap(), vec![0, 1, 2, 3, 0]);
    /// ```
    fn hierholzer_eulerian_path(&self, start: Node) -> Result<Vec<Node>> {
        self.require_undirected()?;
        self.validate_node(start)?;

        match *odd_degree_vertices(self).as_slice() {
            [] => {}
            [first, second] => {
                if start != first && start != second {
                    return Err(GraphError::InvalidEulerStart {
                        start,
                        first,
                        second,
                    });
                }
            }
            _ => {
                return Err(GraphError::NoEulerianPath(
                    "more than two vertices have odd degree",
                ));
            }
        }

        // reversed, so popping yields neighbors in adjacency order
        let mut unused: Vec<Vec<Node>> = self
            .vertices()
            .map(|u| self.as_neighbors_slice(u).iter().rev().copied().collect())
            .collect();

        let mut stack = vec![start];
        let mut path = Vec::with_capacity(self.number_of_edges() as usize + 1);

        while let Some(&u) = stack.last() {
            if let Some(v) = unused[u as usize].pop() {
                if u != v {
                    let mirror = &mut unused[v as usize];
                    if let Some(pos) = mirror.iter().rposition(|&w| w == u) {
                        mirror.remove(pos);
                    }
                }
                stack.push(v);
            } else {
                path.push(u);
                stack.pop();
            }
        }
        path.reverse();

        if path.len() != self.number_of_edges() as usize + 1 {
            debug!(
                used = path.len().saturating_sub(1),
                edges = self.number_of_edges(),
                "eulerian walk did not use every edge"
            );
            return Err(GraphError::NoEulerianPath("edges are not connected"));
        }

        Ok(path)
    }

    /// Computes an Eulerian path choosing the start itself: the lower odd-degree vertex if any,
    /// otherwise the lowest vertex with an incident edge (or `0` if there are no edges).
    fn eulerian_path_auto(&self) -> Result<Vec<Node>> {
        self.require_undirected()?;

        let start = odd_degree_vertices(self)
            .first()
            .copied()
            .or_else(|| self.vertices().find(|&u| self.degree_of(u) > 0))
            .unwrap_or(0);

        self.hierholzer_eulerian_path(start)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EulerianPath for G {}

/// Degree where a self-loop counts twice
fn euler_degree<G: AdjacencyList>(graph: &G, u: Node) -> NumNodes {
    let loops = graph.neighbors_of(u).filter(|&v| v == u).count() as NumNodes;
    graph.degree_of(u) + loops
}

fn odd_degree_vertices<G: AdjacencyList>(graph: &G) -> Vec<Node> {
    graph
        .vertices()
        .filter(|&u| euler_degree(graph, u) % 2 == 1)
        .collect()
}

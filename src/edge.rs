use std::fmt::{Debug, Display};

use crate::Node;

/// An edge is defined by two nodes/endpoints.
/// Whether an edge is directed is decided by the graph it belongs to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Integer weight attached to an edge (used by spanning trees)
pub type Weight = i64;

/// Integer capacity of an edge in a flow network
pub type Capacity = i64;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Attaches a weight to the edge
    pub fn with_weight(self, weight: Weight) -> WeightedEdge {
        WeightedEdge::new(self.0, self.1, weight)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An [`Edge`] carrying an integer weight.
///
/// Weights only matter to Kruskal's spanning tree and to cut edges reported by the flow
/// module; all shortest-path routines treat edges as unit weight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge {
    pub u: Node,
    pub v: Node,
    pub weight: Weight,
}

impl WeightedEdge {
    pub fn new(u: Node, v: Node, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    /// Drops the weight
    pub fn edge(&self) -> Edge {
        Edge(self.u, self.v)
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})[{}]", self.u, self.v, self.weight)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_and_reverse() {
        let e = Edge(4, 1);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge(1, 4));
        assert_eq!(e.reverse(), Edge(1, 4));
        assert!(Edge(3, 3).is_loop());
        assert_eq!(format!("{e}"), "(4,1)");
    }

    #[test]
    fn weighted_edge() {
        let w = Edge(0, 2).with_weight(7);
        assert_eq!(w, WeightedEdge::from((0, 2, 7)));
        assert_eq!(w.edge(), Edge(0, 2));
        assert_eq!(w.to_string(), "(0,2)[7]");
    }
}

use crate::{Capacity, Edge, Node, NumNodes};

/// Errors reported by graph construction, editing, algorithms and IO.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A vertex index outside of `0..n`.
    #[error("invalid node {node} (graph has {num_nodes} nodes)")]
    InvalidNode { node: Node, num_nodes: NumNodes },

    /// Zero nodes or more than the configured ceiling.
    #[error("invalid number of nodes {requested}: must be between 1 and {max}")]
    InvalidNodeCount { requested: u64, max: NumNodes },

    /// `remove_edge` did not find the requested edge.
    #[error("edge {0} not found")]
    EdgeNotFound(Edge),

    /// An undirected edge whose mirrored adjacency entry is missing.
    #[error("edge {0} is stored but its mirror is missing")]
    MirrorEdgeMissing(Edge),

    /// Flow computations need distinct terminals.
    #[error("source and sink must differ (both are {0})")]
    SourceEqualsSink(Node),

    #[error("operation requires a directed graph")]
    RequiresDirected,

    #[error("operation requires an undirected graph")]
    RequiresUndirected,

    /// No spanning tree exists.
    #[error("graph is disconnected: spanning tree covers {reached} of {num_nodes} nodes")]
    Disconnected { reached: NumNodes, num_nodes: NumNodes },

    /// Topological ordering of a cyclic graph.
    #[error("graph contains a cycle")]
    NotAcyclic,

    #[error("no eulerian path: {0}")]
    NoEulerianPath(&'static str),

    /// Start vertex of an eulerian path with two odd vertices must be one of them.
    #[error("eulerian path must start at an odd-degree node ({first} or {second}), not {start}")]
    InvalidEulerStart { start: Node, first: Node, second: Node },

    #[error("allocation failed: {0}")]
    AllocationFailed(#[from] std::collections::TryReserveError),

    #[error("arithmetic overflow while accumulating weights or capacities")]
    CapacityOverflow,

    #[error("negative capacity {capacity} on edge {edge}")]
    InvalidCapacity { edge: Edge, capacity: Capacity },

    #[error("matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Edge-list header declaring zero or a negative number of edges.
    #[error("invalid number of edges: {0}")]
    InvalidEdgeCount(String),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

//! # Summary
//!
//! Human readable listing of a graph:
//! ```text
//! Vertices: 0 1 2 3
//! Number of Vertices: 4
//! Edges: (0, 1) (0, 3) (1, 2) (2, 3)
//! Number of Edges: 4
//! Type: undirected
//! ```
//! Edges are listed as returned by [`AdjacencyList::edges`], i.e. undirected parallel edges are
//! reported once and the edge count is the number of listed edges.

use std::{
    fmt::{Display, Formatter},
    io::Write,
};

use itertools::Itertools;

use super::*;

/// Wraps a graph to display its summary
#[derive(Debug, Clone, Copy)]
pub struct GraphSummary<'a, G> {
    graph: &'a G,
}

impl<'a, G: AdjacencyList> GraphSummary<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

impl<G: AdjacencyList> Display for GraphSummary<'_, G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let graph = self.graph;
        let edges = graph.edges();

        writeln!(f, "Vertices: {}", graph.vertices().join(" "))?;
        writeln!(f, "Number of Vertices: {}", graph.number_of_nodes())?;
        writeln!(
            f,
            "Edges: {}",
            edges.iter().map(|Edge(u, v)| format!("({u}, {v})")).join(" ")
        )?;
        writeln!(f, "Number of Edges: {}", edges.len())?;
        writeln!(
            f,
            "Type: {}",
            if graph.is_directed() { "directed" } else { "undirected" }
        )
    }
}

/// Shorthand for printing summaries
pub trait Summarize: AdjacencyList {
    /// Returns a displayable summary of the graph
    fn summary(&self) -> GraphSummary<'_, Self> {
        GraphSummary::new(self)
    }

    /// Writes the summary into a writer
    fn try_write_summary<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{}", self.summary())?;
        Ok(())
    }
}

impl<G: AdjacencyList> Summarize for G {}

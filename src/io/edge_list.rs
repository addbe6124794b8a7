//! # EdgeList
//!
//! The EdgeList-Format consists of a header line holding the number of edges `m > 0`, followed by
//! `m` non-comment-lines `a, b` each representing an edge `Edge(a, b)`. Nodes are `0`-based.
//!
//! ```text
//! 3
//! 0, 1
//! 1, 2
//! 2, 0
//! ```
//!
//! Unless the number of nodes is configured, it is inferred as the largest endpoint plus one.
//! Lines after the `m`-th edge are ignored.

use std::io::{BufRead, Lines, Write};

use super::*;
use tracing::{debug, warn};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Directedness of the created graph
    directed: bool,
    /// Fixed number of nodes; inferred from the edges if `None`
    num_nodes: Option<NumNodes>,
    /// Ceiling for the number of nodes
    max_nodes: NumNodes,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    /// Undirected graphs, inferred node count, `#` comments
    fn default() -> Self {
        Self {
            directed: false,
            num_nodes: None,
            max_nodes: MAX_NUM_NODES,
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the created graph is directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Fixes the number of nodes. Edges with an endpoint outside of `0..n` are then skipped
    /// with a warning instead of growing the graph.
    pub fn num_nodes(mut self, num_nodes: Option<NumNodes>) -> Self {
        self.num_nodes = num_nodes;
        self
    }

    /// Updates the ceiling for the number of nodes (default: [`MAX_NUM_NODES`])
    pub fn max_nodes(mut self, max_nodes: NumNodes) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.comment_identifier = c.into();
        self
    }
}

impl GraphReader<AdjGraph> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<AdjGraph> {
        let mut lines = EdgeListLines::new(reader, &self.comment_identifier);

        let Some((line, header)) = lines.next_line()? else {
            parse_error!(1, "missing number of edges");
        };
        let num_edges: i64 = match header.trim().parse() {
            Ok(m) => m,
            Err(_) => parse_error!(line, "cannot parse number of edges from {:?}", header.trim()),
        };
        if num_edges <= 0 {
            return Err(GraphError::InvalidEdgeCount(header.trim().to_string()));
        }

        let mut edges: Vec<(usize, i64, i64)> = Vec::new();
        for i in 0..num_edges {
            let Some((line, text)) = lines.next_line()? else {
                parse_error!(
                    lines.line_number + 1,
                    "expected {num_edges} edges but found only {i}"
                );
            };

            let mut parts = text.split(',');
            let a: i64 = parse_next_value!(parts, "source node", line);
            let b: i64 = parse_next_value!(parts, "target node", line);
            if parts.next().is_some() {
                parse_error!(line, "expected `a, b` but found {:?}", text.trim());
            }

            edges.push((line, a, b));
        }

        let n = match self.num_nodes {
            Some(n) => n as i64,
            None => {
                let largest = edges.iter().map(|&(_, a, b)| a.max(b)).max().unwrap_or(-1);
                largest
                    .checked_add(1)
                    .ok_or_else(|| GraphError::InvalidNodeCount {
                        requested: largest as u64 + 1,
                        max: self.max_nodes,
                    })?
            }
        };
        if n <= 0 || n > self.max_nodes as i64 {
            return Err(GraphError::InvalidNodeCount {
                requested: n.max(0) as u64,
                max: self.max_nodes,
            });
        }

        let mut graph = AdjGraph::try_new_with_limit(n as NumNodes, self.directed, self.max_nodes)?;
        let mut skipped = 0usize;
        for (line, a, b) in edges {
            if a < 0 || b < 0 || a >= n || b >= n {
                warn!(line, a, b, num_nodes = n, "edge out of range, skipping");
                skipped += 1;
                continue;
            }
            graph.try_add_edge(a as Node, b as Node)?;
        }

        debug!(
            num_nodes = graph.number_of_nodes(),
            num_edges = graph.number_of_edges(),
            skipped,
            "read edge list"
        );
        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Shorthand for default EdgeListReader settings (apart from directedness).
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R, directed: bool) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P, directed: bool) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?), directed)
    }
}

impl EdgeListRead for AdjGraph {
    fn try_read_edge_list<R: BufRead>(reader: R, directed: bool) -> Result<Self> {
        EdgeListReader::new().directed(directed).try_read_graph(reader)
    }
}

/// Yields non-empty, non-comment lines together with their 1-based line number
struct EdgeListLines<'a, R> {
    lines: Lines<R>,
    line_number: usize,
    comment_identifier: &'a str,
}

impl<'a, R: BufRead> EdgeListLines<'a, R> {
    fn new(reader: R, comment_identifier: &'a str) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
            comment_identifier,
        }
    }

    /// Returns the next relevant line or propagates an IO error
    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed.is_empty()
                || (!self.comment_identifier.is_empty()
                    && trimmed.starts_with(self.comment_identifier))
            {
                continue;
            }
            return Ok(Some((self.line_number, line)));
        }
        Ok(None)
    }
}

/// A writer for the EdgeList-Format.
///
/// Writes every stored edge once: all adjacency entries of directed graphs, and for undirected
/// graphs each entry `(u, v)` with `u <= v` (parallel edges are kept). A graph without edges
/// cannot be represented, as the format requires `m > 0`.
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Optional comment line written before the header
    comment: Option<String>,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `# <comment>` as first line
    pub fn comment<S: Into<String>>(mut self, comment: Option<S>) -> Self {
        self.comment = comment.map(|c| c.into());
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        if graph.is_singleton_graph() {
            return Err(GraphError::InvalidEdgeCount("0".to_string()));
        }

        if let Some(comment) = &self.comment {
            writeln!(writer, "# {comment}")?;
        }
        writeln!(writer, "{}", graph.number_of_edges())?;

        let directed = graph.is_directed();
        for Edge(u, v) in graph
            .vertices()
            .flat_map(|u| graph.edges_of(u))
            .filter(|e| directed || e.is_normalized())
        {
            writeln!(writer, "{u}, {v}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}

//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) nodes and edges.
//!
//! For example, drawing a graph where a shortest path is highlighted in red can be achieved via
//! ```
//! use adjgraph::{prelude::*, algo::*, io::*};
//!
//! let graph = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
//! let path = graph.dijkstra(0, 2).unwrap().unwrap().path;
//!
//! let mut buffer = Vec::new();
//! DotWriter::new()
//!     .highlight_nodes(path.iter().copied(), DotColor::Red)
//!     .highlight_edges(path.windows(2).map(|w| Edge(w[0], w[1])), DotColor::Red)
//!     .try_write_graph(&graph, &mut buffer)
//!     .unwrap();
//! ```
//!
//! Every vertex is written on its own, so isolated vertices are drawn as well.
use std::{
    fmt::{Display, Formatter},
    io::Write,
};

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Prefix of a node (default: `v`)
    prefix: String,
    /// Colored nodes; later entries win
    node_colors: Vec<(Node, DotColor)>,
    /// Colored edges; matched against the written edges ignoring direction in undirected graphs
    edge_colors: Vec<(Edge, DotColor)>,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            prefix: "v".to_string(),
            node_colors: Vec::new(),
            edge_colors: Vec::new(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a node (`v` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> Self
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Fills the given nodes with `color`
    pub fn highlight_nodes<I>(mut self, nodes: I, color: DotColor) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.node_colors
            .extend(nodes.into_iter().map(|u| (u, color)));
        self
    }

    /// Draws the given edges in `color`
    pub fn highlight_edges<I>(mut self, edges: I, color: DotColor) -> Self
    where
        I: IntoIterator<Item = Edge>,
    {
        self.edge_colors
            .extend(edges.into_iter().map(|e| (e, color)));
        self
    }

    /// Formats a node depending on `self.prefix`
    fn format_node(&self, u: Node) -> String {
        format!("{}{u}", self.prefix)
    }

    fn node_color(&self, u: Node) -> Option<DotColor> {
        self.node_colors
            .iter()
            .rev()
            .find(|&&(v, _)| v == u)
            .map(|&(_, c)| c)
    }

    fn edge_color(&self, edge: Edge, directed: bool) -> Option<DotColor> {
        self.edge_colors
            .iter()
            .rev()
            .find(|&&(e, _)| {
                if directed {
                    e == edge
                } else {
                    e.normalized() == edge.normalized()
                }
            })
            .map(|&(_, c)| c)
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        let directed = graph.is_directed();
        let (graph_name, edge_dir) = if directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(writer, "{graph_name} {{")?;

        for u in graph.vertices() {
            match self.node_color(u) {
                Some(color) => writeln!(
                    writer,
                    "    {}[style=filled, color={color}];",
                    self.format_node(u)
                )?,
                None => writeln!(writer, "    {};", self.format_node(u))?,
            }
        }

        for edge in graph.edges() {
            let Edge(u, v) = edge;
            write!(
                writer,
                "    {}{edge_dir}{}",
                self.format_node(u),
                self.format_node(v)
            )?;
            match self.edge_color(edge, directed) {
                Some(color) => writeln!(writer, "[color={color}];")?,
                None => writeln!(writer, ";")?,
            }
        }

        writeln!(writer, "}}")?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl<G> DotWrite for G
where
    G: AdjacencyList,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// A selection of the SVG color names understood by GraphViz,
/// see `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Crimson,
    DarkGreen,
    Gold,
    Gray,
    Green,
    LightBlue,
    Magenta,
    Orange,
    Purple,
    Red,
    Teal,
    Yellow,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_dot<G: AdjacencyList>(writer: &DotWriter, graph: &G) -> String {
        let mut buffer = Vec::new();
        writer.try_write_graph(graph, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn undirected_plain() {
        let graph = AdjGraph::from_edges(3, false, [(1, 0), (1, 2), (0, 1)]).unwrap();
        assert_eq!(
            to_dot(&DotWriter::new(), &graph),
            "graph {\n    v0;\n    v1;\n    v2;\n    v0--v1;\n    v1--v2;\n}\n"
        );
    }

    #[test]
    fn directed_with_prefix_and_isolated_node() {
        let graph = AdjGraph::from_edges(3, true, [(1, 0)]).unwrap();
        assert_eq!(
            to_dot(&DotWriter::new().node_prefix("n"), &graph),
            "digraph {\n    n0;\n    n1;\n    n2;\n    n1->n0;\n}\n"
        );
    }

    #[test]
    fn highlights() {
        let graph = AdjGraph::from_edges(3, false, [(0, 1), (1, 2)]).unwrap();
        let writer = DotWriter::new()
            .highlight_nodes([0, 2], DotColor::Blue)
            .highlight_nodes([2], DotColor::DarkGreen)
            .highlight_edges([Edge(2, 1)], DotColor::Red);

        assert_eq!(
            to_dot(&writer, &graph),
            "graph {\n    v0[style=filled, color=blue];\n    v1;\n    \
             v2[style=filled, color=darkgreen];\n    v0--v1;\n    v1--v2[color=red];\n}\n"
        );
    }

    #[test]
    fn directed_highlights_respect_orientation() {
        let graph = AdjGraph::from_edges(2, true, [(0, 1), (1, 0)]).unwrap();
        let dot = to_dot(
            &DotWriter::new().highlight_edges([Edge(1, 0)], DotColor::Orange),
            &graph,
        );

        assert!(dot.contains("    v0->v1;\n"));
        assert!(dot.contains("    v1->v0[color=orange];\n"));
    }

    #[test]
    fn default_shorthand() {
        let graph = AdjGraph::from_edges(2, false, [(0, 1)]).unwrap();
        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            to_dot(&DotWriter::default(), &graph)
        );
    }
}

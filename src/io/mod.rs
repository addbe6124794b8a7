/*!
# IO

Utilities for reading, writing and printing graphs.

## Input Formats

- **EdgeList**: a first line with the number of edges `m > 0`, followed by `m` lines `a, b`.
  The number of nodes is inferred as the largest endpoint plus one unless configured.

## Output Formats

- **EdgeList**: the input format above; every stored edge is written once.
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/),
  optionally highlighting nodes and edges (e.g. a path or a cut returned by an algorithm).
- [`GraphSummary`]: a human readable listing of vertices and edges.

## Traits

[`GraphReader`] and [`GraphWriter`] are implemented by readers and writers for a specific format.
Both report failures as [`GraphError`]; IO errors are wrapped in [`GraphError::Io`].
*/

pub mod dot;
pub mod edge_list;
pub mod summary;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::prelude::*;

pub use dot::*;
pub use edge_list::*;
pub use summary::*;

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let mut writer = BufWriter::new(File::create(path)?);
        self.try_write_graph(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Shorthand for returning a parse error for the given (1-based) line early
macro_rules! parse_error {
    ($line: expr, $($reason: tt)*) => {
        return Err(GraphError::Parse {
            line: $line,
            reason: format!($($reason)*),
        })
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator: expr, $name: expr, $line: expr) => {{
        let Some(token) = $iterator.next() else {
            parse_error!($line, "premature end of line when parsing {}", $name);
        };

        match token.trim().parse() {
            Ok(value) => value,
            Err(_) => parse_error!($line, "cannot parse {} from {:?}", $name, token.trim()),
        }
    }};
}

use parse_error;
use parse_next_value;

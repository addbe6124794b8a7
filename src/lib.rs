/*!
`adjgraph` is a graph data structure & algorithms library for small to medium sized graphs.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
The number of nodes is fixed when the graph is created and capped by [`MAX_NUM_NODES`].
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; [`WeightedEdge`] additionally carries
an integer weight.

The only representation is [`AdjGraph`](crate::repr::AdjGraph): one growable neighbor list per node,
in insertion order, with parallel edges kept. A graph is either **directed** or **undirected**; this
is decided at creation:

- In an **undirected** graph, adding `Edge(u, v)` stores `v` in the list of `u` and `u` in the list of `v`.
  Self-loops are stored once.
- In a **directed** graph, only `v` is stored in the list of `u`.

# Design

All algorithms are extension traits implemented on every graph providing [`AdjacencyList`](crate::ops::AdjacencyList),
so they are usable as methods directly (`graph.bfs(0)`, `graph.kruskal_mst()`, ...).
Algorithms never mutate the graph; all working memory is allocated per call and every result is
owned by the caller.

Failures are reported as [`GraphError`]; nothing in this crate prints. Diagnostics are emitted via
`tracing` and are only visible if the application installs a subscriber.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and [`AdjGraph`](crate::repr::AdjGraph),
- [`algo`] includes traversal, shortest paths, spanning trees, flows/cuts, colorings and structural analysis,
- [`io`] includes the edge-list reader/writer, a textual summary and a GraphViz writer,
- [`utils`] includes the disjoint-set structure used by Kruskal's algorithm.

In most use-cases, `use adjgraph::{prelude::*, algo::*};` suffices for your needs.

```
use adjgraph::{prelude::*, algo::*};

let graph = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

assert!(graph.has_cycle().unwrap());
assert_eq!(graph.bfs_order(0).unwrap(), vec![0, 1, 3, 2]);
assert_eq!(graph.kruskal_mst().unwrap().total_weight, 3);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `adjgraph::prelude` includes definitions for nodes, edges, errors, all basic graph operation traits as well as the graph representation.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}

/*!
# Graph Algorithms

This module provides a suite of **graph algorithms** built on top of the graph representation in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use adjgraph::algo::*;
```
and gain access to traversal, shortest paths, spanning trees, flows, colorings and structural analysis.
Traversals are additionally provided as **iterators**, making it easy to consume results lazily.

No algorithm mutates the graph it is called on.
*/

mod bridges;
mod coloring;
mod cycles;
mod eulerian;
mod network_flow;
mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::{prelude::*, utils::*};
use tracing::{debug, trace};

pub use bridges::*;
pub use coloring::*;
pub use cycles::*;
pub use eulerian::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;

/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly manipulate
node values without abstracting over them.

Values that may be absent (predecessors, distances) are always wrapped in `Option` rather
than encoded by a reserved sentinel, so no arithmetic can accidentally happen on them.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `n - 1`
pub type Node = u32;

/// Number of nodes of a graph
pub type NumNodes = Node;

/// Length of a shortest path counted in (unit-weight) edges
pub type Distance = u32;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Graphs with more nodes are rejected at construction.
///
/// Several algorithms allocate `n x n` tables (Floyd-Warshall, capacity matrices, edge
/// deduplication), so the ceiling keeps a single request from exhausting memory.
pub const MAX_NUM_NODES: NumNodes = 10_000;

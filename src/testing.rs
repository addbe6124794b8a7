//! Random instances shared by the randomized tests of all modules.

use rand::Rng;

use crate::{ops::*, repr::*, *};

/// Creates a list of `m` random edges for nodes `0..n` (loops and duplicates possible)
pub fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<Edge> {
    (0..m)
        .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
        .collect()
}

/// Creates a random graph with `n` nodes and `m` (possibly parallel) edges
pub fn random_graph<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges, directed: bool) -> AdjGraph {
    AdjGraph::from_edges(n, directed, random_edges(rng, n, m)).unwrap()
}

/// Creates a random simple graph (no loops, no parallel edges) where each pair is
/// connected with probability `p`
pub fn random_simple_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64, directed: bool) -> AdjGraph {
    let mut graph = AdjGraph::try_new(n, directed).unwrap();
    for u in 0..n {
        for v in 0..n {
            if u == v || (!directed && v < u) {
                continue;
            }
            if rng.random_bool(p) {
                graph.try_add_edge(u, v).unwrap();
            }
        }
    }
    graph
}

/// Creates a random connected undirected graph: a random spanning tree plus `extra` edges
pub fn random_connected_graph<R: Rng>(rng: &mut R, n: NumNodes, extra: NumEdges) -> AdjGraph {
    let mut graph = AdjGraph::try_new(n, false).unwrap();
    for v in 1..n {
        let u = rng.random_range(0..v);
        graph.try_add_edge(u, v).unwrap();
    }
    for Edge(u, v) in random_edges(rng, n, extra) {
        graph.try_add_edge(u, v).unwrap();
    }
    graph
}

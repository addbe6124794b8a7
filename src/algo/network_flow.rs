/*!
# Maximum Flow and Minimum Cut

This module computes maximum `(s, t)`-flows over a dense [`CapacityMatrix`] with the
Edmonds–Karp algorithm: augmenting paths are found by **breadth-first search** over the
residual network, which bounds the number of augmentations polynomially.

## Core concepts
- The **residual capacity** of `(u, v)` is the original capacity minus the flow on `(u, v)`
  plus the flow on `(v, u)`, which may be pushed back.
- A **minimum cut** is read from the final residual network: the set `S` of nodes still reachable
  from `s` is the source side, and the cut consists of all original edges with positive capacity
  leaving `S`. Its value always equals the maximum flow.

## Implementations
- [`EdmondsKarp`] is an iterator over augmenting paths and their bottleneck capacities.
- [`edmonds_karp_max_flow`] and [`min_cut`] run it to completion.
- [`NetworkFlow`] offers both directly on graphs, using unit capacities per adjacency entry.
*/

use super::*;
use std::collections::VecDeque;

/// Square matrix of non-negative edge capacities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityMatrix {
    n: NumNodes,
    capacities: Vec<Capacity>,
}

impl CapacityMatrix {
    /// Creates an `n x n` matrix with all capacities `0`
    pub fn new(n: NumNodes) -> Result<Self> {
        if n == 0 || n > MAX_NUM_NODES {
            return Err(GraphError::InvalidNodeCount {
                requested: n as u64,
                max: MAX_NUM_NODES,
            });
        }

        let size = n as usize * n as usize;
        let mut capacities = Vec::new();
        capacities.try_reserve_exact(size)?;
        capacities.resize(size, 0);

        Ok(Self { n, capacities })
    }

    /// Creates a matrix from its rows; `rows[u][v]` is the capacity of `(u, v)`.
    ///
    /// Fails if the rows do not form a square matrix or if any capacity is negative.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let caps = CapacityMatrix::from_rows(vec![vec![0, 3], vec![0, 0]]).unwrap();
    /// assert_eq!(caps.get(0, 1), 3);
    /// assert!(CapacityMatrix::from_rows(vec![vec![0, 3]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Capacity>>) -> Result<Self> {
        let mut matrix = Self::new(rows.len() as NumNodes)?;

        for (u, row) in rows.into_iter().enumerate() {
            if row.len() != matrix.len() {
                return Err(GraphError::DimensionMismatch {
                    expected: matrix.len(),
                    actual: row.len(),
                });
            }

            for (v, capacity) in row.into_iter().enumerate() {
                matrix.set(u as Node, v as Node, capacity)?;
            }
        }

        Ok(matrix)
    }

    /// Creates a matrix where each adjacency entry `(u, v)` contributes capacity `1`.
    /// Parallel edges add up; undirected edges have capacity in both directions.
    pub fn from_graph<G: AdjacencyList>(graph: &G) -> Result<Self> {
        let mut matrix = Self::new(graph.number_of_nodes())?;
        for Edge(u, v) in graph.vertices().flat_map(|u| graph.edges_of(u)) {
            matrix.add(u, v, 1)?;
        }
        Ok(matrix)
    }

    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }

    fn validate_edge(&self, u: Node, v: Node) -> Result<()> {
        self.validate_node(u)?;
        self.validate_node(v)
    }

    /// Returns the capacity of `(u, v)`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn get(&self, u: Node, v: Node) -> Capacity {
        self.capacities[self.index(u, v)]
    }

    /// Sets the capacity of `(u, v)`
    pub fn set(&mut self, u: Node, v: Node, capacity: Capacity) -> Result<()> {
        self.validate_edge(u, v)?;
        if capacity < 0 {
            return Err(GraphError::InvalidCapacity {
                edge: Edge(u, v),
                capacity,
            });
        }

        let idx = self.index(u, v);
        self.capacities[idx] = capacity;
        Ok(())
    }

    /// Increases the capacity of `(u, v)` by `capacity`
    pub fn add(&mut self, u: Node, v: Node, capacity: Capacity) -> Result<()> {
        let total = self
            .get_checked(u, v)?
            .checked_add(capacity)
            .ok_or(GraphError::CapacityOverflow)?;
        self.set(u, v, total)
    }

    fn get_checked(&self, u: Node, v: Node) -> Result<Capacity> {
        self.validate_edge(u, v)?;
        Ok(self.get(u, v))
    }

    /// Returns all edges with positive capacity in row-major order
    pub fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        (0..self.n)
            .flat_map(move |u| (0..self.n).map(move |v| (u, v)))
            .filter_map(|(u, v)| {
                let capacity = self.get(u, v);
                (capacity > 0).then(|| WeightedEdge::new(u, v, capacity))
            })
    }
}

impl GraphNodeOrder for CapacityMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

/// An augmenting path with the amount of flow pushed along it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentingPath {
    pub path: Vec<Node>,
    pub bottleneck: Capacity,
}

/// Implementation of the Edmonds–Karp algorithm.
///
/// Owns a residual copy of the capacities and a predecessor array filled by each BFS.
/// Every call to [`Iterator::next`] finds one shortest augmenting path, pushes its bottleneck
/// capacity and returns it; iteration ends once the sink is no longer reachable.
pub struct EdmondsKarp {
    residual: CapacityMatrix,
    predecessor: Vec<Option<Node>>,
    s: Node,
    t: Node,
}

impl EdmondsKarp {
    /// Creates a new solver for the terminals `s` and `t`.
    ///
    /// Fails if a terminal is out of range or `s == t`.
    pub fn new(capacities: &CapacityMatrix, s: Node, t: Node) -> Result<Self> {
        capacities.validate_edge(s, t)?;
        if s == t {
            return Err(GraphError::SourceEqualsSink(s));
        }

        Ok(Self {
            residual: capacities.clone(),
            predecessor: vec![None; capacities.len()],
            s,
            t,
        })
    }

    /// Performs a BFS over edges with positive residual capacity starting at the source.
    /// Stops early once the sink is reached if `stop_at_sink` is set.
    /// Returns the set of reached nodes; predecessors of reached nodes are stored.
    fn bfs(&mut self, stop_at_sink: bool) -> NodeBitSet {
        let n = self.residual.number_of_nodes();
        let mut visited = NodeBitSet::new(n);
        let mut queue = VecDeque::from(vec![self.s]);
        visited.set_bit(self.s);
        self.predecessor.fill(None);

        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if self.residual.get(u, v) <= 0 || visited.set_bit(v) {
                    continue;
                }

                self.predecessor[v as usize] = Some(u);
                if stop_at_sink && v == self.t {
                    return visited;
                }
                queue.push_back(v);
            }
        }

        visited
    }

    /// Finds and applies a single augmenting path
    fn augment(&mut self) -> Result<Option<AugmentingPath>> {
        if !self.bfs(true).get_bit(self.t) {
            return Ok(None);
        }

        let mut path = vec![self.t];
        let mut bottleneck = Capacity::MAX;
        let mut v = self.t;
        while let Some(u) = self.predecessor[v as usize] {
            bottleneck = bottleneck.min(self.residual.get(u, v));
            path.push(u);
            v = u;
        }
        path.reverse();
        debug_assert_eq!(path[0], self.s);

        for w in path.windows(2) {
            let (u, v) = (w[0], w[1]);
            let forward = self.residual.index(u, v);
            let backward = self.residual.index(v, u);

            // saturating: a residual of `Capacity::MAX` exceeds any flow that can still be
            // pushed back without the total flow overflowing
            self.residual.capacities[forward] -= bottleneck;
            self.residual.capacities[backward] =
                self.residual.capacities[backward].saturating_add(bottleneck);
        }

        trace!(len = path.len(), bottleneck, "augmenting path");
        Ok(Some(AugmentingPath { path, bottleneck }))
    }

    /// Pushes flow until no augmenting path remains and returns the flow value
    pub fn run(&mut self) -> Result<Capacity> {
        let mut flow: Capacity = 0;
        let mut rounds = 0usize;
        while let Some(augmenting) = self.next() {
            flow = flow
                .checked_add(augmenting?.bottleneck)
                .ok_or(GraphError::CapacityOverflow)?;
            rounds += 1;
        }

        debug!(s = self.s, t = self.t, flow, rounds, "max flow computed");
        Ok(flow)
    }

    /// Returns all nodes reachable from the source in the current residual network
    pub fn source_side(&mut self) -> Vec<Node> {
        let reached = self.bfs(false);
        self.residual
            .vertices()
            .filter(|&u| reached.get_bit(u))
            .collect()
    }
}

/// Iterates over augmenting paths; an error ends the iteration
impl Iterator for EdmondsKarp {
    type Item = Result<AugmentingPath>;

    fn next(&mut self) -> Option<Self::Item> {
        self.augment().transpose()
    }
}

/// Minimum `(s, t)`-cut derived from a maximum flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCut {
    /// Total capacity of the cut, equal to the maximum flow
    pub value: Capacity,
    /// Nodes reachable from `s` in the final residual network, in ascending order
    pub source_side: Vec<Node>,
    /// Original edges leaving the source side, weighted with their capacity
    pub edges: Vec<WeightedEdge>,
}

/// Computes the value of a maximum flow from `s` to `t`.
///
/// # Examples
/// ```
/// use adjgraph::{prelude::*, algo::*};
///
/// let caps = CapacityMatrix::from_rows(vec![
///     vec![0, 3, 2, 0],
///     vec![0, 0, 1, 2],
///     vec![0, 0, 0, 3],
///     vec![0, 0, 0, 0],
/// ]).unwrap();
/// assert_eq!(edmonds_karp_max_flow(&caps, 0, 3).unwrap(), 5);
/// ```
pub fn edmonds_karp_max_flow(capacities: &CapacityMatrix, s: Node, t: Node) -> Result<Capacity> {
    EdmondsKarp::new(capacities, s, t)?.run()
}

/// Computes a minimum `(s, t)`-cut.
pub fn min_cut(capacities: &CapacityMatrix, s: Node, t: Node) -> Result<MinCut> {
    let mut solver = EdmondsKarp::new(capacities, s, t)?;
    let value = solver.run()?;
    let source_side = solver.source_side();

    let mut in_source_side = vec![false; capacities.len()];
    for &u in &source_side {
        in_source_side[u as usize] = true;
    }

    let edges: Vec<WeightedEdge> = capacities
        .edges()
        .filter(|e| in_source_side[e.u as usize] && !in_source_side[e.v as usize])
        .collect();

    debug_assert_eq!(edges.iter().map(|e| e.weight).sum::<Capacity>(), value);
    Ok(MinCut {
        value,
        source_side,
        edges,
    })
}

/// Flow computations on graphs with unit capacity per adjacency entry
pub trait NetworkFlow: AdjacencyList {
    /// Returns the maximum number of edge-disjoint paths from `s` to `t`
    /// (parallel edges count individually).
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// assert_eq!(g.max_flow(0, 2).unwrap(), 2);
    /// ```
    fn max_flow(&self, s: Node, t: Node) -> Result<Capacity> {
        edmonds_karp_max_flow(&CapacityMatrix::from_graph(self)?, s, t)
    }

    /// Returns a minimum set of edges separating `t` from `s`
    fn min_cut(&self, s: Node, t: Node) -> Result<MinCut> {
        min_cut(&CapacityMatrix::from_graph(self)?, s, t)
    }
}

impl<G: AdjacencyList> NetworkFlow for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn textbook_network() -> CapacityMatrix {
        let mut caps = CapacityMatrix::new(6).unwrap();
        for (u, v, c) in [
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (2, 1, 4),
            (1, 3, 12),
            (3, 2, 9),
            (2, 4, 14),
            (4, 3, 7),
            (3, 5, 20),
            (4, 5, 4),
        ] {
            caps.set(u, v, c).unwrap();
        }
        caps
    }

    #[test]
    fn textbook_max_flow() {
        let caps = textbook_network();
        assert_eq!(edmonds_karp_max_flow(&caps, 0, 5).unwrap(), 23);

        let cut = min_cut(&caps, 0, 5).unwrap();
        assert_eq!(cut.value, 23);
        assert_eq!(cut.source_side, vec![0, 1, 2, 4]);
        assert_eq!(
            cut.edges,
            vec![
                WeightedEdge::new(1, 3, 12),
                WeightedEdge::new(4, 3, 7),
                WeightedEdge::new(4, 5, 4),
            ]
        );
    }

    #[test]
    fn augmenting_paths_are_shortest_first() {
        let caps = textbook_network();
        let paths = EdmondsKarp::new(&caps, 0, 5)
            .unwrap()
            .map(|p| p.unwrap())
            .collect_vec();

        assert!(paths.windows(2).all(|w| w[0].path.len() <= w[1].path.len()));
        assert_eq!(paths.iter().map(|p| p.bottleneck).sum::<Capacity>(), 23);
        assert_eq!(paths[0].path, vec![0, 1, 3, 5]);
    }

    #[test]
    fn no_path_means_zero_flow() {
        let caps = CapacityMatrix::from_rows(vec![vec![0, 5, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();

        assert_eq!(edmonds_karp_max_flow(&caps, 0, 2).unwrap(), 0);
        let cut = min_cut(&caps, 0, 2).unwrap();
        assert_eq!(cut.value, 0);
        assert_eq!(cut.source_side, vec![0, 1]);
        assert!(cut.edges.is_empty());
    }

    #[test]
    fn invalid_input() {
        let caps = textbook_network();
        assert!(matches!(
            edmonds_karp_max_flow(&caps, 2, 2),
            Err(GraphError::SourceEqualsSink(2))
        ));
        assert!(matches!(
            min_cut(&caps, 0, 6),
            Err(GraphError::InvalidNode { node: 6, num_nodes: 6 })
        ));

        assert!(matches!(
            CapacityMatrix::from_rows(vec![vec![0, 1], vec![0]]),
            Err(GraphError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert!(matches!(
            CapacityMatrix::from_rows(vec![vec![0, -1], vec![0, 0]]),
            Err(GraphError::InvalidCapacity {
                edge: Edge(0, 1),
                capacity: -1
            })
        ));
        assert!(CapacityMatrix::from_rows(vec![]).is_err());
        assert!(CapacityMatrix::new(3).unwrap().set(3, 0, 1).is_err());
    }

    #[test]
    fn flow_overflow_is_reported() {
        let max = Capacity::MAX;
        let caps = CapacityMatrix::from_rows(vec![
            vec![0, max, max, 0],
            vec![0, 0, 0, max],
            vec![0, 0, 0, max],
            vec![0, 0, 0, 0],
        ])
        .unwrap();

        assert!(matches!(
            edmonds_karp_max_flow(&caps, 0, 3),
            Err(GraphError::CapacityOverflow)
        ));

        let mut caps = CapacityMatrix::new(2).unwrap();
        caps.add(0, 1, max).unwrap();
        assert!(matches!(caps.add(0, 1, 1), Err(GraphError::CapacityOverflow)));
    }

    #[test]
    fn maximal_capacities_in_both_directions() {
        let max = Capacity::MAX;
        let caps = CapacityMatrix::from_rows(vec![vec![0, max], vec![max, 0]]).unwrap();

        assert_eq!(edmonds_karp_max_flow(&caps, 0, 1).unwrap(), max);
        let cut = min_cut(&caps, 0, 1).unwrap();
        assert_eq!(cut.value, max);
        assert_eq!(cut.source_side, vec![0]);
        assert_eq!(cut.edges, vec![WeightedEdge::new(0, 1, max)]);

        // reverse residual of (0, 1) saturates
        let caps = CapacityMatrix::from_rows(vec![
            vec![0, max, 1, 0],
            vec![max, 0, 0, 1],
            vec![0, 0, 0, 1],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(edmonds_karp_max_flow(&caps, 0, 3).unwrap(), 2);
    }

    #[test]
    fn unit_capacities_from_graph() {
        let graph = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 1)]).unwrap();
        let caps = CapacityMatrix::from_graph(&graph).unwrap();
        assert_eq!(caps.get(0, 1), 2);
        assert_eq!(caps.get(1, 0), 2);
        assert_eq!(caps.get(0, 2), 0);

        assert_eq!(graph.max_flow(0, 2).unwrap(), 2);
        assert_eq!(graph.max_flow(0, 1).unwrap(), 3);

        let digraph = AdjGraph::from_edges(3, true, [(0, 1), (1, 2), (0, 2)]).unwrap();
        assert_eq!(digraph.max_flow(0, 2).unwrap(), 2);
        assert_eq!(digraph.max_flow(2, 0).unwrap(), 0);
        assert_eq!(digraph.min_cut(0, 2).unwrap().edges.len(), 2);
    }

    #[test]
    fn randomized_duality_against_brute_force() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        for _ in 0..100 {
            let n = rng.random_range(2..8);
            let mut caps = CapacityMatrix::new(n).unwrap();
            for _ in 0..rng.random_range(0..3 * n) {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                caps.set(u, v, rng.random_range(0..20)).unwrap();
            }

            let s = rng.random_range(0..n);
            let t = (s + rng.random_range(1..n)) % n;

            let flow = edmonds_karp_max_flow(&caps, s, t).unwrap();
            let cut = min_cut(&caps, s, t).unwrap();
            assert_eq!(flow, cut.value);
            assert!(cut.source_side.contains(&s));
            assert!(!cut.source_side.contains(&t));
            assert_eq!(cut.edges.iter().map(|e| e.weight).sum::<Capacity>(), flow);

            // minimum over all cuts separating s from t
            let others = (0..n).filter(|&u| u != s && u != t).collect_vec();
            let best = others
                .iter()
                .copied()
                .powerset()
                .map(|mut side| {
                    side.push(s);
                    caps.edges()
                        .filter(|e| side.contains(&e.u) && !side.contains(&e.v))
                        .map(|e| e.weight)
                        .sum::<Capacity>()
                })
                .min()
                .unwrap();
            assert_eq!(flow, best);
        }
    }

    #[test]
    fn randomized_unit_flow_on_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for _ in 0..50 {
            let n = rng.random_range(2..20);
            let directed = rng.random_bool(0.5);
            let graph = random_graph(rng, n, 2 * n, directed);
            let s = rng.random_range(0..n);
            let t = (s + 1) % n;

            let flow = graph.max_flow(s, t).unwrap();
            assert!(flow <= graph.degree_of(s) as Capacity);

            let reachable = graph.bfs(s).unwrap().any(|u| u == t);
            assert_eq!(flow > 0, reachable);
        }
    }
}

/*!
# Unit-Weight Shortest Paths

Three classical shortest-path routines, all treating every edge as weight `1`:

- [`ShortestPaths::dijkstra`]: vertex-selection Dijkstra with an `O(n^2)` scan instead of a priority queue.
  Among vertices of equal tentative distance, the one with the lowest index is settled first.
- [`ShortestPaths::bellman_ford`]: up to `n - 1` relaxation passes over all adjacency entries,
  stopping early after a pass without updates. Negative cycles cannot occur with unit weights.
- [`ShortestPaths::floyd_warshall`]: computes the complete all-pairs table and answers one query from it.

All three return `Ok(None)` if `target` is unreachable from `source` and fail if either is out of range.
Distances and predecessors are `Option`s; an unreachable vertex simply has no distance.
*/

use super::*;

/// A shortest path between two vertices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Number of edges on the path
    pub distance: Distance,
    /// All vertices on the path, starting at the source and ending at the target
    pub path: Vec<Node>,
}

/// Single-source distance table with predecessor links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestDistances {
    source: Node,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<Node>>,
}

impl ShortestDistances {
    fn new(n: usize, source: Node) -> Self {
        let mut distances = vec![None; n];
        distances[source as usize] = Some(0);
        Self {
            source,
            distances,
            predecessors: vec![None; n],
        }
    }

    /// Lowers the distance of `v` to `dist` (reached via `u`) if this is an improvement
    fn relax(&mut self, u: Node, v: Node, dist: Distance) -> bool {
        match self.distances[v as usize] {
            Some(d) if d <= dist => false,
            _ => {
                self.distances[v as usize] = Some(dist);
                self.predecessors[v as usize] = Some(u);
                true
            }
        }
    }

    /// The vertex the table was computed from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the distance from the source to `v` or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn distance_to(&self, v: Node) -> Option<Distance> {
        self.distances[v as usize]
    }

    /// Returns the predecessor of `v` on a shortest path from the source.
    /// The source itself and unreachable vertices have none.
    /// ** Panics if `v >= n` **
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize]
    }

    /// Returns all distances indexed by vertex
    pub fn distances(&self) -> &[Option<Distance>] {
        &self.distances
    }

    /// Follows the predecessor links back from `target`.
    /// Returns `None` if `target` is unreachable.
    /// ** Panics if `target >= n` **
    pub fn path_to(&self, target: Node) -> Option<ShortestPath> {
        let distance = self.distance_to(target)?;

        let mut path = Vec::with_capacity(distance as usize + 1);
        path.push(target);
        let mut u = target;
        while u != self.source {
            u = self.predecessor_of(u)?;
            path.push(u);
        }
        path.reverse();

        debug_assert_eq!(path.len(), distance as usize + 1);
        Some(ShortestPath { distance, path })
    }
}

/// All-pairs distances with predecessor matrix, owned by a single Floyd-Warshall call
struct PathTable {
    n: usize,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<Node>>,
}

impl PathTable {
    fn new<G: AdjacencyList>(graph: &G) -> Result<Self> {
        let n = graph.len();
        let size = n * n;

        let mut distances = Vec::new();
        distances.try_reserve_exact(size)?;
        distances.resize(size, None);

        let mut predecessors = Vec::new();
        predecessors.try_reserve_exact(size)?;
        predecessors.resize(size, None);

        let mut table = Self {
            n,
            distances,
            predecessors,
        };

        for u in graph.vertices() {
            let idx = table.index(u, u);
            table.distances[idx] = Some(0);
        }

        for Edge(u, v) in graph.vertices().flat_map(|u| graph.edges_of(u)) {
            if u != v {
                let idx = table.index(u, v);
                table.distances[idx] = Some(1);
                table.predecessors[idx] = Some(u);
            }
        }

        Ok(table)
    }

    fn index(&self, u: Node, v: Node) -> usize {
        u as usize * self.n + v as usize
    }

    fn compute(&mut self) {
        let n = self.n as Node;
        for k in 0..n {
            for i in 0..n {
                let Some(dik) = self.distances[self.index(i, k)] else {
                    continue;
                };

                for j in 0..n {
                    let Some(dkj) = self.distances[self.index(k, j)] else {
                        continue;
                    };

                    let ij = self.index(i, j);
                    let through_k = dik + dkj;
                    if self.distances[ij].is_none_or(|d| through_k < d) {
                        self.distances[ij] = Some(through_k);
                        self.predecessors[ij] = self.predecessors[self.index(k, j)];
                    }
                }
            }
        }
    }

    fn path(&self, source: Node, target: Node) -> Option<ShortestPath> {
        let distance = self.distances[self.index(source, target)]?;

        let mut path = vec![target];
        let mut u = target;
        while u != source {
            u = self.predecessors[self.index(source, u)]?;
            path.push(u);
        }
        path.reverse();

        Some(ShortestPath { distance, path })
    }
}

/// Unit-weight shortest path computations
pub trait ShortestPaths: AdjacencyList {
    /// Computes distances from `source` to all vertices using Dijkstra's algorithm
    /// with linear-scan vertex selection (ties broken by lowest index).
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, true, [(0, 1), (1, 2), (0, 2)]).unwrap();
    /// let table = g.shortest_distances(0).unwrap();
    /// assert_eq!(table.distances(), &[Some(0), Some(1), Some(1), None]);
    /// ```
    fn shortest_distances(&self, source: Node) -> Result<ShortestDistances> {
        self.validate_node(source)?;

        let mut table = ShortestDistances::new(self.len(), source);
        let mut settled = self.vertex_bitset_unset();

        loop {
            let mut next: Option<(Node, Distance)> = None;
            for u in self.vertices() {
                if settled.get_bit(u) {
                    continue;
                }
                match (table.distance_to(u), next) {
                    (Some(d), Some((_, best))) if d < best => next = Some((u, d)),
                    (Some(d), None) => next = Some((u, d)),
                    _ => {}
                }
            }

            let Some((u, du)) = next else {
                break;
            };
            settled.set_bit(u);

            for v in self.neighbors_of(u) {
                if !settled.get_bit(v) {
                    table.relax(u, v, du + 1);
                }
            }
        }

        Ok(table)
    }

    /// Returns a shortest path from `source` to `target` computed with Dijkstra's algorithm.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// let sp = g.dijkstra(0, 2).unwrap().unwrap();
    /// assert_eq!(sp.distance, 2);
    /// assert_eq!(sp.path, vec![0, 1, 2]);
    /// ```
    fn dijkstra(&self, source: Node, target: Node) -> Result<Option<ShortestPath>> {
        self.validate_node(target)?;
        Ok(self.shortest_distances(source)?.path_to(target))
    }

    /// Returns a shortest path from `source` to `target` computed with the Bellman-Ford algorithm
    fn bellman_ford(&self, source: Node, target: Node) -> Result<Option<ShortestPath>> {
        self.validate_node(source)?;
        self.validate_node(target)?;

        let mut table = ShortestDistances::new(self.len(), source);

        for pass in 1..self.len() {
            let mut updated = false;
            for u in self.vertices() {
                let Some(du) = table.distance_to(u) else {
                    continue;
                };
                for v in self.neighbors_of(u) {
                    updated |= table.relax(u, v, du + 1);
                }
            }

            if !updated {
                trace!(pass, "bellman-ford converged");
                break;
            }
        }

        Ok(table.path_to(target))
    }

    /// Returns a shortest path from `source` to `target` read from the all-pairs
    /// table of the Floyd-Warshall algorithm.
    ///
    /// Requires `O(n^2)` memory; fails with [`GraphError::AllocationFailed`] if the table
    /// cannot be allocated.
    fn floyd_warshall(&self, source: Node, target: Node) -> Result<Option<ShortestPath>> {
        self.validate_node(source)?;
        self.validate_node(target)?;

        debug!(num_nodes = self.len(), "computing all-pairs table");
        let mut table = PathTable::new(self)?;
        table.compute();

        Ok(table.path(source, target))
    }
}

impl<G: AdjacencyList> ShortestPaths for G {}

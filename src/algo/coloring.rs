/*!
# Vertex Colorings

Two heuristics assigning each vertex a color `0, 1, 2, ...` such that no two adjacent
vertices share a color:

- [`Colorings::greedy_sequential_coloring`] processes vertices in index order and assigns each
  the smallest color not used by an already colored neighbor.
- [`Colorings::dsatur_coloring`] repeatedly colors the vertex with the most distinctly colored
  neighbors (its *saturation*), breaking ties by higher degree and then by lower index.

Neither is optimal in general, but both use at most `max_degree + 1` colors.

Self-loops are ignored. Directed graphs are colored over their underlying undirected graph,
i.e. `u` and `v` conflict if either `(u, v)` or `(v, u)` exists.
*/

use super::*;
use fxhash::FxHashSet;

/// Color assignment of a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    /// Color of every vertex, indexed by vertex
    pub colors: Vec<NumNodes>,
    /// Number of distinct colors used
    pub num_colors: NumNodes,
}

impl Coloring {
    fn from_colors(colors: Vec<NumNodes>) -> Self {
        let num_colors = colors.iter().max().map_or(0, |&c| c + 1);
        Self { colors, num_colors }
    }

    /// Returns the color of `u`.
    /// ** Panics if `u >= n` **
    pub fn color_of(&self, u: Node) -> NumNodes {
        self.colors[u as usize]
    }

    /// Returns *true* if no edge (other than a self-loop) connects two vertices of the same color
    pub fn is_proper<G: AdjacencyList>(&self, graph: &G) -> bool {
        self.colors.len() == graph.len()
            && graph
                .vertices()
                .flat_map(|u| graph.edges_of(u))
                .all(|Edge(u, v)| u == v || self.color_of(u) != self.color_of(v))
    }
}

/// Returns the neighbors each vertex must not share a color with (self-loops removed)
fn conflict_lists<G: AdjacencyList>(graph: &G) -> Vec<Vec<Node>> {
    if graph.is_undirected() {
        return graph
            .vertices()
            .map(|u| graph.neighbors_of(u).filter(|&v| v != u).collect())
            .collect();
    }

    let mut conflicts = vec![Vec::new(); graph.len()];
    for Edge(u, v) in graph.vertices().flat_map(|u| graph.edges_of(u)) {
        if u != v {
            conflicts[u as usize].push(v);
            conflicts[v as usize].push(u);
        }
    }
    conflicts
}

/// Vertex coloring heuristics
pub trait Colorings: AdjacencyList {
    /// Colors vertices in index order with the smallest free color.
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// let coloring = g.greedy_sequential_coloring();
    /// assert_eq!(coloring.colors, vec![0, 1, 0, 1]);
    /// assert!(coloring.is_proper(&g));
    /// ```
    fn greedy_sequential_coloring(&self) -> Coloring {
        let conflicts = conflict_lists(self);
        let mut colors: Vec<Option<NumNodes>> = vec![None; self.len()];

        // blocked_by[c] == Some(u) iff color c is taken by a neighbor of u
        let mut blocked_by: Vec<Option<Node>> = vec![None; self.len() + 1];

        for u in self.vertices() {
            for &v in &conflicts[u as usize] {
                if let Some(c) = colors[v as usize] {
                    blocked_by[c as usize] = Some(u);
                }
            }

            let color = (0..)
                .find(|&c: &NumNodes| blocked_by[c as usize] != Some(u))
                .unwrap_or_default();
            colors[u as usize] = Some(color);
        }

        let coloring = Coloring::from_colors(colors.into_iter().flatten().collect());
        debug!(num_colors = coloring.num_colors, "greedy coloring");
        coloring
    }

    /// Colors vertices by decreasing saturation (DSATUR).
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// // a path 0 - 2 - 3 - 1: greedy needs 3 colors, DSATUR only 2
    /// let g = AdjGraph::from_edges(4, false, [(0, 2), (2, 3), (3, 1)]).unwrap();
    /// assert_eq!(g.dsatur_coloring().num_colors, 2);
    /// ```
    fn dsatur_coloring(&self) -> Coloring {
        let conflicts = conflict_lists(self);
        let mut colors: Vec<Option<NumNodes>> = vec![None; self.len()];
        let mut neighbor_colors: Vec<FxHashSet<NumNodes>> = vec![FxHashSet::default(); self.len()];

        for _ in self.vertices() {
            let mut best: Option<(Node, usize, usize)> = None;
            for u in self.vertices().filter(|&u| colors[u as usize].is_none()) {
                let saturation = neighbor_colors[u as usize].len();
                let degree = conflicts[u as usize].len();
                match best {
                    Some((_, s, d)) if (saturation, degree) <= (s, d) => {}
                    _ => best = Some((u, saturation, degree)),
                }
            }

            let Some((u, saturation, _)) = best else {
                break;
            };

            let taken = &neighbor_colors[u as usize];
            let color = (0..).find(|c| !taken.contains(c)).unwrap_or_default();
            colors[u as usize] = Some(color);
            trace!(u, saturation, color, "dsatur step");

            for &v in &conflicts[u as usize] {
                if colors[v as usize].is_none() {
                    neighbor_colors[v as usize].insert(color);
                }
            }
        }

        let coloring = Coloring::from_colors(colors.into_iter().flatten().collect());
        debug!(num_colors = coloring.num_colors, "dsatur coloring");
        coloring
    }
}

impl<G: AdjacencyList> Colorings for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn four_cycle() {
        let graph = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

        for coloring in [graph.greedy_sequential_coloring(), graph.dsatur_coloring()] {
            assert_eq!(coloring.colors, vec![0, 1, 0, 1]);
            assert_eq!(coloring.num_colors, 2);
            assert!(coloring.is_proper(&graph));
        }
    }

    #[test]
    fn triangle_with_pendant() {
        let graph = AdjGraph::from_edges(4, false, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();

        let greedy = graph.greedy_sequential_coloring();
        assert_eq!(greedy.colors, vec![0, 1, 2, 0]);

        // 2 has the highest degree and is colored first
        let dsatur = graph.dsatur_coloring();
        assert_eq!(dsatur.colors, vec![1, 2, 0, 1]);
        assert_eq!(dsatur.num_colors, 3);
    }

    #[test]
    fn self_loops_are_ignored() {
        let graph = AdjGraph::from_edges(2, false, [(0, 0), (0, 1), (1, 1)]).unwrap();
        let coloring = graph.greedy_sequential_coloring();
        assert_eq!(coloring.colors, vec![0, 1]);
        assert!(coloring.is_proper(&graph));
        assert!(graph.dsatur_coloring().is_proper(&graph));
    }

    #[test]
    fn directed_edges_conflict_both_ways() {
        let graph = AdjGraph::from_edges(3, true, [(1, 0), (2, 1)]).unwrap();

        let coloring = graph.greedy_sequential_coloring();
        assert_eq!(coloring.colors, vec![0, 1, 0]);
        assert!(coloring.is_proper(&graph));
        assert!(graph.dsatur_coloring().is_proper(&graph));
    }

    #[test]
    fn improper_coloring_is_detected() {
        let graph = AdjGraph::from_edges(3, false, [(0, 1), (1, 2)]).unwrap();
        let coloring = Coloring::from_colors(vec![0, 1, 1]);
        assert_eq!(coloring.num_colors, 2);
        assert!(!coloring.is_proper(&graph));
        assert!(!Coloring::from_colors(vec![0, 1]).is_proper(&graph));
    }

    #[test]
    fn edgeless_graph_uses_one_color() {
        let graph = AdjGraph::try_new(5, false).unwrap();
        assert_eq!(graph.greedy_sequential_coloring().num_colors, 1);
        assert_eq!(graph.dsatur_coloring().colors, vec![0; 5]);
    }

    #[test]
    fn randomized_colorings_are_proper() {
        let rng = &mut Pcg64Mcg::seed_from_u64(29);

        for _ in 0..100 {
            let n = rng.random_range(1..40);
            let directed = rng.random_bool(0.3);
            let m = rng.random_range(0..4 * n);
            let graph = random_graph(rng, n, m, directed);
            let bound = conflict_lists(&graph)
                .iter()
                .map(|nbs| nbs.len() as NumNodes)
                .max()
                .unwrap_or(0)
                + 1;

            for coloring in [graph.greedy_sequential_coloring(), graph.dsatur_coloring()] {
                assert!(coloring.is_proper(&graph));
                assert!(coloring.num_colors <= bound);
                assert!(coloring.num_colors >= 1);
            }
        }
    }

    #[test]
    fn randomized_simple_graphs_respect_degree_bound() {
        let rng = &mut Pcg64Mcg::seed_from_u64(30);

        for _ in 0..50 {
            let n = rng.random_range(1..40);
            let p = rng.random_range(0.05..0.6);
            let graph = random_simple_graph(rng, n, p, false);

            for coloring in [graph.greedy_sequential_coloring(), graph.dsatur_coloring()] {
                assert!(coloring.is_proper(&graph));
                assert!(coloring.num_colors <= graph.max_degree() + 1);
            }
        }
    }

    #[test]
    fn randomized_dsatur_is_exact_on_bipartite_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for _ in 0..100 {
            let n = rng.random_range(2..30);
            let mut graph = AdjGraph::try_new(n, false).unwrap();
            for _ in 0..2 * n {
                let u = rng.random_range(0..n);
                let v = rng.random_range(0..n);
                if u % 2 != v % 2 {
                    graph.try_add_edge(u, v).unwrap();
                }
            }

            let coloring = graph.dsatur_coloring();
            assert!(coloring.is_proper(&graph));
            assert!(coloring.num_colors <= 2);
        }
    }
}

use super::{cycles::DfsFrame, *};

/// Bridges and articulation points of an undirected graph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralCuts {
    /// Edges whose removal disconnects their endpoints; normalized and sorted
    pub bridges: Vec<Edge>,
    /// Vertices whose removal increases the number of components; sorted
    pub articulation_points: Vec<Node>,
}

pub trait Bridges: AdjacencyList {
    /// Computes all bridges and articulation points in a single DFS (Tarjan's algorithm).
    ///
    /// A tree edge `(u, v)` is a bridge iff `low[v] > discovery[u]`. A non-root vertex `u` is an
    /// articulation point iff some tree child `v` has `low[v] >= discovery[u]`; a DFS root iff it
    /// has more than one tree child. Only one copy of the edge to the parent is treated as tree
    /// edge, so parallel edges are never bridges.
    ///
    /// Fails with [`GraphError::RequiresUndirected`] on directed graphs.
    fn detect_bridges_and_articulations(&self) -> Result<StructuralCuts> {
        self.require_undirected()?;
        Ok(BridgeSearch::new(self).compute())
    }

    /// Returns all bridges, normalized and sorted
    ///
    /// # Examples
    /// ```
    /// use adjgraph::{prelude::*, algo::*};
    ///
    /// let g = AdjGraph::from_edges(6, false, [(0, 1), (0, 2), (2, 1), (1, 3), (3, 4), (4, 5), (5, 3)]).unwrap();
    /// assert_eq!(g.compute_bridges().unwrap(), vec![Edge(1, 3)]);
    /// ```
    fn compute_bridges(&self) -> Result<Vec<Edge>> {
        Ok(self.detect_bridges_and_articulations()?.bridges)
    }

    /// Returns all articulation points in ascending order
    fn articulation_points(&self) -> Result<Vec<Node>> {
        Ok(self.detect_bridges_and_articulations()?.articulation_points)
    }
}

impl<G: AdjacencyList> Bridges for G {}

struct BridgeSearch<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    nodes_info: Vec<NodeInfo>,
    is_articulation: Vec<bool>,
    time: Node,
    bridges: Vec<Edge>,
}

impl<'a, G: AdjacencyList> BridgeSearch<'a, G> {
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            nodes_info: vec![NodeInfo::default(); graph.len()],
            is_articulation: vec![false; graph.len()],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn compute(mut self) -> StructuralCuts {
        let mut stack = Vec::new();

        for root in self.graph.vertices() {
            if self.visited.set_bit(root) {
                continue;
            }

            self.discover(root);
            let mut root_children = 0;
            stack.push(DfsFrame::new(root, None));

            while let Some(frame) = stack.last_mut() {
                let u = frame.node;

                let Some(&v) = self.graph.as_neighbors_slice(u).get(frame.cursor) else {
                    let parent = frame.parent;
                    stack.pop();
                    if let Some(p) = parent {
                        self.finish_child(p, u);
                        if p == root {
                            root_children += 1;
                        }
                    }
                    continue;
                };
                frame.cursor += 1;

                if frame.is_parent_edge(v) {
                    continue;
                }

                if self.visited.set_bit(v) {
                    let v_disc = self.nodes_info[v as usize].discovery;
                    self.nodes_info[u as usize].update_low(v_disc);
                } else {
                    self.discover(v);
                    stack.push(DfsFrame::new(v, Some(u)));
                }
            }

            self.is_articulation[root as usize] = root_children > 1;
        }

        self.bridges.sort_unstable();
        let articulation_points: Vec<Node> = self
            .graph
            .vertices()
            .filter(|&u| self.is_articulation[u as usize])
            .collect();

        debug!(
            bridges = self.bridges.len(),
            articulation_points = articulation_points.len(),
            "structural cuts computed"
        );

        StructuralCuts {
            bridges: self.bridges,
            articulation_points,
        }
    }

    fn discover(&mut self, u: Node) {
        self.time += 1;
        self.nodes_info[u as usize] = NodeInfo {
            discovery: self.time,
            low: self.time,
        };
    }

    /// Propagates the low-link of the finished tree child `v` to its parent `u`
    fn finish_child(&mut self, u: Node, v: Node) {
        let info_v = self.nodes_info[v as usize];
        self.nodes_info[u as usize].update_low(info_v.low);

        let u_disc = self.nodes_info[u as usize].discovery;
        if info_v.low > u_disc {
            self.bridges.push(Edge(u, v).normalized());
        }
        // only meaningful for non-roots; the root is decided by its number of children
        if info_v.low >= u_disc {
            self.is_articulation[u as usize] = true;
        }
    }
}

#[derive(Clone, Copy, Default)]
struct NodeInfo {
    low: Node,
    discovery: Node,
}

impl NodeInfo {
    fn update_low(&mut self, value: Node) {
        self.low = self.low.min(value);
    }
}

use super::*;

/// The adjacency list of a single node: neighbors in insertion order, duplicates allowed.
///
/// In contrast to a set-like neighborhood, removal is *stable*: only the first occurrence
/// of a neighbor is removed and all remaining entries keep their relative order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArrNeighborhood(Vec<Node>);

impl ArrNeighborhood {
    /// Returns the number of adjacency entries
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns a slice-reference of the neighborhood
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    /// Makes room for one more entry, reporting allocation failure instead of aborting
    pub fn try_reserve_one(&mut self) -> Result<()> {
        self.0.try_reserve(1)?;
        Ok(())
    }

    /// Appends a neighbor without checking for an existing copy
    pub fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    /// Returns the position of the first occurrence of `u`
    pub fn position_of(&self, u: Node) -> Option<usize> {
        self.0.iter().position(|&x| x == u)
    }

    /// Removes the entry at `pos` while preserving the order of all other entries
    pub fn remove_at(&mut self, pos: usize) -> Node {
        self.0.remove(pos)
    }

    /// Removes the most recently added entry if it equals `u`.
    /// Used to roll back a half-finished insertion.
    pub(super) fn undo_add_neighbor(&mut self, u: Node) {
        debug_assert_eq!(self.0.last(), Some(&u));
        self.0.pop();
    }
}

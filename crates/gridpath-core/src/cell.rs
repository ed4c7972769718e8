//! Cell state machine: [`CellState`] and [`Cell`].
//!
//! The original visualizer encoded cell state as comparable display
//! colors; here state is a closed enum so the algorithms never depend on
//! presentation.

use crate::geom::Pos;

/// The mutually exclusive state of a grid cell. Exactly one holds at a
/// time.
///
/// `Start`, `End` and `Barrier` are set by the editing caller;
/// `Frontier` ("open" in classic search terminology), `Visited`
/// ("closed") and `Path` are set by the active search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Untouched by editing or search.
    #[default]
    Unvisited,
    /// Discovered and queued for expansion.
    Frontier,
    /// Expanded.
    Visited,
    /// The search origin.
    Start,
    /// The search target.
    End,
    /// Impassable; excluded from neighbor lists at recomputation time.
    Barrier,
    /// On the reconstructed path.
    Path,
}

impl CellState {
    #[inline]
    pub fn is_unvisited(self) -> bool {
        self == Self::Unvisited
    }

    #[inline]
    pub fn is_frontier(self) -> bool {
        self == Self::Frontier
    }

    #[inline]
    pub fn is_visited(self) -> bool {
        self == Self::Visited
    }

    #[inline]
    pub fn is_start(self) -> bool {
        self == Self::Start
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self == Self::End
    }

    #[inline]
    pub fn is_barrier(self) -> bool {
        self == Self::Barrier
    }

    #[inline]
    pub fn is_path(self) -> bool {
        self == Self::Path
    }
}

/// One grid cell: a fixed position, a state tag, and the cached list of
/// navigable neighbors.
///
/// The neighbor list reflects the barrier configuration *as of the last
/// adjacency recomputation*; later barrier edits do not update it until
/// [`Grid::recompute_neighbors`](crate::Grid::recompute_neighbors) runs
/// again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) pos: Pos,
    pub(crate) state: CellState,
    pub(crate) neighbors: Vec<Pos>,
}

impl Cell {
    /// Create an `Unvisited` cell at `pos` with no neighbors computed.
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            state: CellState::Unvisited,
            neighbors: Vec::new(),
        }
    }

    /// The cell's position, fixed at construction.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// The current state tag.
    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Navigable neighbors as of the last adjacency recomputation.
    #[inline]
    pub fn neighbors(&self) -> &[Pos] {
        &self.neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_unvisited() {
        let c = Cell::new(Pos::new(1, 2));
        assert_eq!(c.state(), CellState::Unvisited);
        assert!(c.state().is_unvisited());
        assert!(c.neighbors().is_empty());
    }

    #[test]
    fn predicates_match_states() {
        assert!(CellState::Frontier.is_frontier());
        assert!(CellState::Visited.is_visited());
        assert!(CellState::Start.is_start());
        assert!(CellState::End.is_end());
        assert!(CellState::Barrier.is_barrier());
        assert!(CellState::Path.is_path());
        assert!(!CellState::Barrier.is_path());
        assert!(!CellState::Unvisited.is_start());
    }
}

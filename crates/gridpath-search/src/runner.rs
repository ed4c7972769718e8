//! Strategy selection, the shared run bookkeeping, and the
//! [`SearchOutcome`] result type.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Context, Grid, Pos};

use crate::{astar, bfs, dfs, dijkstra, ucs};

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// The result of one search invocation.
///
/// "No path exists" and "cancelled mid-run" are deliberately distinct:
/// after [`Exhausted`](SearchOutcome::Exhausted) the grid shows the full
/// exploration (`Visited`/`Frontier` marks) for diagnostic display, while
/// after [`Cancelled`](SearchOutcome::Cancelled) all accumulated marks
/// and parent links are non-authoritative and must not be read as a
/// search result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A path was found. Positions run from just after the start cell to
    /// the end cell, in start-to-end order; the grid has the matching
    /// `Path` marks as a side effect.
    Found(Vec<Pos>),
    /// The frontier emptied without reaching the end cell.
    Exhausted,
    /// External cancellation was observed between expansions.
    Cancelled,
}

impl SearchOutcome {
    /// Whether a path was found.
    #[inline]
    pub fn found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path positions, if a path was found.
    pub fn path(&self) -> Option<&[Pos]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Algorithm selection
// ---------------------------------------------------------------------------

/// The five traversal strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    AStar,
    Dfs,
    Bfs,
    Ucs,
    Dijkstra,
}

impl Algorithm {
    /// Every strategy, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Self::AStar,
        Self::Dfs,
        Self::Bfs,
        Self::Ucs,
        Self::Dijkstra,
    ];

    /// The display name, matching the names accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "A*",
            Self::Dfs => "DFS",
            Self::Bfs => "BFS",
            Self::Ucs => "UCS",
            Self::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Self::AStar),
            "dfs" => Ok(Self::Dfs),
            "bfs" => Ok(Self::Bfs),
            "ucs" => Ok(Self::Ucs),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Error for an algorithm name that is none of `A*`, `DFS`, `BFS`,
/// `UCS`, `Dijkstra`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm {:?}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Run the selected strategy.
///
/// Expects adjacency already recomputed for the current barrier layout,
/// and `start`/`end` distinct non-barrier cells; these preconditions are
/// the caller's responsibility and are not re-validated here. `on_step`
/// fires after every expansion; `ctx` is polled once per expansion.
pub fn run(
    algorithm: Algorithm,
    grid: &Grid,
    start: Pos,
    end: Pos,
    on_step: impl FnMut(),
    ctx: &Context,
) -> SearchOutcome {
    log::debug!(
        "{algorithm} search {start} -> {end} on a {n}x{n} grid",
        n = grid.dim()
    );
    match algorithm {
        Algorithm::AStar => astar(grid, start, end, on_step, ctx),
        Algorithm::Dfs => dfs(grid, start, end, on_step, ctx),
        Algorithm::Bfs => bfs(grid, start, end, on_step, ctx),
        Algorithm::Ucs => ucs(grid, start, end, on_step, ctx),
        Algorithm::Dijkstra => dijkstra(grid, start, end, on_step, ctx),
    }
}

// ---------------------------------------------------------------------------
// Shared run bookkeeping
// ---------------------------------------------------------------------------

/// Sentinel parent index: the cell was reached from nowhere.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Sentinel cost: not yet reached.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Per-invocation bookkeeping, discarded when the search returns.
///
/// The parent relation is a flat index map, never a pointer stored on
/// the cell itself: cells are shared structure reused across many runs.
pub(crate) struct RunState {
    dim: i32,
    pub(crate) came_from: Vec<usize>,
}

impl RunState {
    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            dim: grid.dim(),
            came_from: vec![NO_PARENT; grid.len()],
        }
    }

    /// Flat index of `p`, or `None` if outside the grid.
    #[inline]
    pub(crate) fn idx(&self, p: Pos) -> Option<usize> {
        if p.row >= 0 && p.col >= 0 && p.row < self.dim && p.col < self.dim {
            Some((p.row * self.dim + p.col) as usize)
        } else {
            None
        }
    }

    /// Position of a flat index.
    #[inline]
    pub(crate) fn pos(&self, idx: usize) -> Pos {
        Pos::new(idx as i32 / self.dim, idx as i32 % self.dim)
    }
}

/// Frontier entry for the priority-queue strategies, ordered for use in
/// a `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct QueueEntry {
    pub(crate) key: i32,
    pub(crate) seq: u32,
    pub(crate) idx: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest key first;
        // equal keys fall back to insertion sequence, earlier wins.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let outcome = SearchOutcome::Found(vec![Pos::new(0, 1), Pos::new(1, 1)]);
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, back);
    }

    #[test]
    fn algorithm_round_trip() {
        for algo in Algorithm::ALL {
            let json = serde_json::to_string(&algo).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(algo, back);
        }
    }
}

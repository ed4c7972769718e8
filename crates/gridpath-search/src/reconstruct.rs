//! Path reconstruction from the parent map.

use gridpath_core::{CellState, Grid, Pos};

use crate::runner::{NO_PARENT, RunState};

/// Walk the parent chain from `end` back to the cell with no parent (the
/// start), mark every walked cell `Path`, and return the positions in
/// start-to-end order — start excluded, end included.
///
/// If `end` has no parent the path is unreachable through `came_from`:
/// nothing is marked and the returned path is empty. The caller is
/// expected to re-mark the end cell `End` afterwards.
pub(crate) fn reconstruct_path(grid: &Grid, state: &RunState, end: Pos) -> Vec<Pos> {
    let Some(mut current) = state.idx(end) else {
        return Vec::new();
    };

    let mut path = Vec::new();
    while state.came_from[current] != NO_PARENT {
        path.push(state.pos(current));
        current = state.came_from[current];
    }
    path.reverse();

    for &p in &path {
        grid.set_state(p, CellState::Path);
    }
    if !path.is_empty() {
        log::debug!("path ({} steps): {:?}", path.len(), path);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_parents_in_start_to_end_order() {
        let grid = Grid::new(3);
        let mut state = RunState::new(&grid);
        // start (0,0) -> (0,1) -> (0,2)
        let a = state.idx(Pos::new(0, 0)).unwrap();
        let b = state.idx(Pos::new(0, 1)).unwrap();
        let c = state.idx(Pos::new(0, 2)).unwrap();
        state.came_from[b] = a;
        state.came_from[c] = b;

        let path = reconstruct_path(&grid, &state, Pos::new(0, 2));
        assert_eq!(path, vec![Pos::new(0, 1), Pos::new(0, 2)]);
        assert_eq!(grid.state(Pos::new(0, 1)), CellState::Path);
        assert_eq!(grid.state(Pos::new(0, 2)), CellState::Path);
        // The start cell is never marked.
        assert_eq!(grid.state(Pos::new(0, 0)), CellState::Unvisited);
    }

    #[test]
    fn unreachable_end_yields_empty_path_and_no_marks() {
        let grid = Grid::new(3);
        let state = RunState::new(&grid);
        let path = reconstruct_path(&grid, &state, Pos::new(2, 2));
        assert!(path.is_empty());
        assert!(grid.iter().all(|(_, s)| s == CellState::Unvisited));
    }
}

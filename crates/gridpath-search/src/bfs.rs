//! Breadth-first search.

use std::collections::VecDeque;

use gridpath_core::{CellState, Context, Grid, Pos};

use crate::reconstruct::reconstruct_path;
use crate::runner::{RunState, SearchOutcome};

/// Breadth-first search from `start` to `end` over the grid's cached
/// adjacency.
///
/// Cost-agnostic: the frontier is a FIFO queue, a neighbor is enqueued
/// (and counts as discovered) the first time it is seen, and every cell
/// is enqueued at most once. On the unit-cost grid this still yields a
/// shortest path.
///
/// `on_step` fires after each expansion's neighbor sweep, before the
/// expanded cell is re-marked `Visited`; `ctx` is polled once per
/// iteration, before the next frontier pop.
pub fn bfs(
    grid: &Grid,
    start: Pos,
    end: Pos,
    mut on_step: impl FnMut(),
    ctx: &Context,
) -> SearchOutcome {
    let mut state = RunState::new(grid);
    let (Some(start_idx), Some(end_idx)) = (state.idx(start), state.idx(end)) else {
        return SearchOutcome::Exhausted;
    };

    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut discovered = vec![false; grid.len()];
    discovered[start_idx] = true;
    queue.push_back(start_idx);

    loop {
        if ctx.is_done() {
            return SearchOutcome::Cancelled;
        }
        let Some(ci) = queue.pop_front() else {
            break;
        };

        if ci == end_idx {
            let path = reconstruct_path(grid, &state, end);
            grid.set_state(end, CellState::End);
            return SearchOutcome::Found(path);
        }

        let cp = state.pos(ci);
        for np in grid.neighbors(cp) {
            let Some(ni) = state.idx(np) else {
                continue;
            };
            if !discovered[ni] {
                state.came_from[ni] = ci;
                discovered[ni] = true;
                queue.push_back(ni);
                grid.set_state(np, CellState::Frontier);
            }
        }

        on_step();
        if ci != start_idx {
            grid.set_state(cp, CellState::Visited);
        }
    }
    SearchOutcome::Exhausted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searchable_grid(dim: i32, start: Pos, end: Pos, barriers: &[Pos]) -> Grid {
        let grid = Grid::new(dim);
        for &b in barriers {
            grid.set_state(b, CellState::Barrier);
        }
        grid.set_state(start, CellState::Start);
        grid.set_state(end, CellState::End);
        grid.recompute_all_neighbors();
        grid
    }

    #[test]
    fn shortest_path_with_full_exploration() {
        let start = Pos::ZERO;
        let end = Pos::new(4, 4);
        let grid = searchable_grid(5, start, end, &[]);

        let mut steps = 0usize;
        let outcome = bfs(&grid, start, end, || steps += 1, &Context::new());
        let path = outcome.path().expect("no path found");
        assert_eq!(path.len(), 8);
        assert_eq!(*path.last().unwrap(), end);
        // The far corner is discovered last: every other cell expands
        // first.
        assert_eq!(steps, 24);
    }

    #[test]
    fn each_cell_is_expanded_at_most_once() {
        let start = Pos::ZERO;
        let end = Pos::new(3, 3);
        let grid = searchable_grid(4, start, end, &[]);

        let mut steps = 0usize;
        let outcome = bfs(&grid, start, end, || steps += 1, &Context::new());
        assert!(outcome.found());
        assert!(steps < grid.len());
    }

    #[test]
    fn exhausts_on_a_sealed_end() {
        let start = Pos::ZERO;
        let end = Pos::new(2, 2);
        // Seal the end cell behind its two neighbors.
        let wall = [Pos::new(1, 2), Pos::new(2, 1)];
        let grid = searchable_grid(3, start, end, &wall);

        let outcome = bfs(&grid, start, end, || {}, &Context::new());
        assert_eq!(outcome, SearchOutcome::Exhausted);
        // Exploration marks stay behind for diagnostics.
        assert!(grid.iter().any(|(_, s)| s == CellState::Visited));
    }
}

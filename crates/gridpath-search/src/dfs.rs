//! Depth-first search.

use gridpath_core::{CellState, Context, Grid, Pos};

use crate::reconstruct::reconstruct_path;
use crate::runner::{RunState, SearchOutcome};

/// Depth-first search from `start` to `end` over the grid's cached
/// adjacency.
///
/// The frontier is a LIFO stack, expanded most-recent-push-first, with
/// the same discovered-on-push policy as BFS (each cell pushed at most
/// once). The path it finds is valid but not necessarily shortest.
///
/// `on_step` fires after each expansion's neighbor sweep, before the
/// expanded cell is re-marked `Visited`; `ctx` is polled once per
/// iteration, before the next frontier pop.
pub fn dfs(
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

    let mut stack: Vec<usize> = vec![start_idx];
    let mut discovered = vec![false; grid.len()];
    discovered[start_idx] = true;

    loop {
        if ctx.is_done() {
            return SearchOutcome::Cancelled;
        }
        let Some(ci) = stack.pop() else {
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
                stack.push(ni);
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

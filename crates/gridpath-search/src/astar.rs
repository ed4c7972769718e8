//! A* search with the Manhattan heuristic.

use std::collections::BinaryHeap;

use gridpath_core::{CellState, Context, Grid, Pos};

use crate::distance::manhattan;
use crate::reconstruct::reconstruct_path;
use crate::runner::{QueueEntry, RunState, SearchOutcome, UNREACHABLE};

/// A* from `start` to `end` over the grid's cached adjacency.
///
/// The frontier is ordered by `f = g + h` with ties broken by insertion
/// sequence (earlier-discovered wins). A cell that is already in the
/// frontier is *not* re-enqueued when a relaxation improves its score;
/// its existing entry keeps the old priority and is still honored if
/// popped. This mirrors the behavior being reproduced rather than
/// textbook A*, so no optimality claim is made beyond the tested
/// properties.
///
/// `on_step` fires after each expansion's neighbor sweep, before the
/// expanded cell is re-marked `Visited`; `ctx` is polled once per
/// iteration, before the next frontier pop.
pub fn astar(
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

    let mut g_score = vec![UNREACHABLE; grid.len()];
    g_score[start_idx] = 0;

    let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut in_open = vec![false; grid.len()];
    let mut seq: u32 = 0;
    open.push(QueueEntry {
        key: manhattan(start, end),
        seq,
        idx: start_idx,
    });
    in_open[start_idx] = true;

    loop {
        if ctx.is_done() {
            return SearchOutcome::Cancelled;
        }
        let Some(current) = open.pop() else {
            break;
        };
        let ci = current.idx;
        in_open[ci] = false;

        if ci == end_idx {
            let path = reconstruct_path(grid, &state, end);
            grid.set_state(end, CellState::End);
            return SearchOutcome::Found(path);
        }

        let cp = state.pos(ci);
        let current_g = g_score[ci];

        for np in grid.neighbors(cp) {
            let Some(ni) = state.idx(np) else {
                continue;
            };
            let tentative = current_g + 1;
            if tentative < g_score[ni] {
                state.came_from[ni] = ci;
                g_score[ni] = tentative;
                if !in_open[ni] {
                    seq += 1;
                    open.push(QueueEntry {
                        key: tentative + manhattan(np, end),
                        seq,
                        idx: ni,
                    });
                    in_open[ni] = true;
                    grid.set_state(np, CellState::Frontier);
                }
            }
        }

        on_step();
        if ci != start_idx {
            grid.set_state(cp, CellState::Visited);
        }
    }
    SearchOutcome::Exhausted
}

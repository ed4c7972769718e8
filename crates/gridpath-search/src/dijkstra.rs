//! Dijkstra / uniform-cost search.

use std::collections::BinaryHeap;

use gridpath_core::{CellState, Context, Grid, Pos};

use crate::reconstruct::reconstruct_path;
use crate::runner::{QueueEntry, RunState, SearchOutcome, UNREACHABLE};

/// Dijkstra from `start` to `end` over the grid's cached adjacency.
///
/// The frontier is ordered by accumulated cost (every edge costs 1),
/// ties broken by insertion sequence. Each relaxation re-enqueues the
/// neighbor unconditionally, so duplicate frontier entries may coexist;
/// a duplicate popped after its cell was already expanded is simply
/// re-expanded, relaxing nothing.
///
/// `on_step` fires after each expansion's neighbor sweep, before the
/// expanded cell is re-marked `Visited`; `ctx` is polled once per
/// iteration, before the next frontier pop.
pub fn dijkstra(
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

    let mut cost_so_far = vec![UNREACHABLE; grid.len()];
    cost_so_far[start_idx] = 0;

    let mut open: BinaryHeap<QueueEntry> = BinaryHeap::new();
    let mut seq: u32 = 0;
    open.push(QueueEntry {
        key: 0,
        seq,
        idx: start_idx,
    });

    loop {
        if ctx.is_done() {
            return SearchOutcome::Cancelled;
        }
        let Some(current) = open.pop() else {
            break;
        };
        let ci = current.idx;

        if ci == end_idx {
            let path = reconstruct_path(grid, &state, end);
            grid.set_state(end, CellState::End);
            return SearchOutcome::Found(path);
        }

        let cp = state.pos(ci);
        let current_cost = cost_so_far[ci];

        for np in grid.neighbors(cp) {
            let Some(ni) = state.idx(np) else {
                continue;
            };
            let new_cost = current_cost + 1;
            if new_cost < cost_so_far[ni] {
                state.came_from[ni] = ci;
                cost_so_far[ni] = new_cost;
                seq += 1;
                open.push(QueueEntry {
                    key: new_cost,
                    seq,
                    idx: ni,
                });
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

/// Uniform-cost search from `start` to `end`.
///
/// On a unit-cost grid UCS *is* Dijkstra; the separate entry point is
/// kept for interface parity with the algorithm menu.
pub fn ucs(
    grid: &Grid,
    start: Pos,
    end: Pos,
    on_step: impl FnMut(),
    ctx: &Context,
) -> SearchOutcome {
    dijkstra(grid, start, end, on_step, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar;

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
    fn shortest_path_on_the_open_grid() {
        let start = Pos::ZERO;
        let end = Pos::new(4, 4);
        let grid = searchable_grid(5, start, end, &[]);
        let outcome = dijkstra(&grid, start, end, || {}, &Context::new());
        let path = outcome.path().expect("no path found");
        assert_eq!(path.len(), 8);
        assert_eq!(*path.last().unwrap(), end);
    }

    #[test]
    fn agrees_with_astar_around_barriers() {
        let start = Pos::ZERO;
        let end = Pos::new(5, 5);
        let barriers = [
            Pos::new(1, 1),
            Pos::new(1, 2),
            Pos::new(1, 3),
            Pos::new(3, 3),
            Pos::new(3, 4),
            Pos::new(4, 1),
        ];

        let grid = searchable_grid(6, start, end, &barriers);
        let dijkstra_len = dijkstra(&grid, start, end, || {}, &Context::new())
            .path()
            .expect("dijkstra failed")
            .len();

        let grid = searchable_grid(6, start, end, &barriers);
        let astar_len = astar(&grid, start, end, || {}, &Context::new())
            .path()
            .expect("astar failed")
            .len();

        assert_eq!(dijkstra_len, astar_len);
    }

    #[test]
    fn ucs_is_dijkstra() {
        let start = Pos::ZERO;
        let end = Pos::new(4, 0);
        let wall = [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)];

        let grid = searchable_grid(5, start, end, &wall);
        let a = dijkstra(&grid, start, end, || {}, &Context::new());
        let grid = searchable_grid(5, start, end, &wall);
        let b = ucs(&grid, start, end, || {}, &Context::new());
        assert_eq!(a, b);
    }
}

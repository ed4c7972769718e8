//! Grid-graph search algorithms with incremental progress reporting.
//!
//! This crate provides five interchangeable traversal strategies over a
//! [`gridpath_core::Grid`], all solving the same problem — find (or fail
//! to find) a path from a start cell to an end cell through non-barrier
//! cells — while invoking a caller-supplied step callback after every
//! expansion so an external observer can visualize exploration order:
//!
//! - **A\*** ([`astar`]) — `f = g + h` priority order, Manhattan heuristic
//! - **Dijkstra** ([`dijkstra`]) — accumulated-cost priority order
//! - **Uniform-Cost Search** ([`ucs`]) — Dijkstra under another name on
//!   this unit-cost grid
//! - **BFS** ([`bfs`]) — FIFO insertion order
//! - **DFS** ([`dfs`]) — LIFO, most-recent-push-first
//!
//! All strategies share one contract: adjacency must already be computed
//! for the current barrier layout
//! ([`Grid::recompute_all_neighbors`](gridpath_core::Grid::recompute_all_neighbors)),
//! the run is synchronous on the calling thread, the step callback is the
//! only suspension point, and a [`gridpath_core::Context`] is polled once
//! per expansion for cooperative cancellation. Results come back as a
//! [`SearchOutcome`], which keeps "no path exists" and "cancelled
//! mid-run" distinct.
//!
//! Use [`run`] to select a strategy by [`Algorithm`] value (or by name
//! via its `FromStr`).

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod reconstruct;
mod runner;

pub use astar::astar;
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::{dijkstra, ucs};
pub use distance::manhattan;
pub use runner::{Algorithm, ParseAlgorithmError, SearchOutcome, run};

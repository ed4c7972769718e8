//! **gridpath-core** — Grid and cell-state primitives for grid-graph
//! pathfinding.
//!
//! This crate provides the foundational types shared across the
//! *gridpath* workspace: the `(row, col)` position type, the cell state
//! machine, the square grid with cached adjacency, and the cooperative
//! cancellation token used to abort a running search.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod signal;

pub use cell::{Cell, CellState};
pub use geom::Pos;
pub use grid::Grid;
pub use signal::Context;

//! Headless pathfinding demo.
//!
//! Builds a grid with a random barrier field, then runs either the
//! algorithm named on the command line or all five, printing the final
//! exploration state of each run.
//!
//! Run: cargo run --bin pathdemo [algorithm]
//! Set RUST_LOG=debug to see per-run path logging.

use rand::RngExt;

use gridpath_core::{CellState, Context, Grid, Pos};
use gridpath_search::{Algorithm, SearchOutcome, run};

const DIM: i32 = 12;
const BARRIER_DENSITY: f64 = 0.25;

fn main() {
    env_logger::init();

    let algorithms: Vec<Algorithm> = match std::env::args().nth(1) {
        Some(name) => match name.parse() {
            Ok(algo) => vec![algo],
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => Algorithm::ALL.to_vec(),
    };

    let start = Pos::ZERO;
    let end = Pos::new(DIM - 1, DIM - 1);
    let barriers = random_barriers(start, end);
    log::info!("{} barrier cells on a {DIM}x{DIM} grid", barriers.len());

    for algo in algorithms {
        // Fresh grid per run so exploration marks don't accumulate.
        let grid = build_grid(start, end, &barriers);
        let mut steps = 0usize;
        let outcome = run(algo, &grid, start, end, || steps += 1, &Context::new());
        match outcome {
            SearchOutcome::Found(path) => {
                println!("{algo}: {} path steps, {steps} expansions", path.len());
            }
            SearchOutcome::Exhausted => {
                println!("{algo}: no path, {steps} expansions");
            }
            SearchOutcome::Cancelled => {
                println!("{algo}: cancelled after {steps} expansions");
            }
        }
        render(&grid);
    }
}

fn random_barriers(start: Pos, end: Pos) -> Vec<Pos> {
    let mut rng = rand::rng();
    let mut barriers = Vec::new();
    for row in 0..DIM {
        for col in 0..DIM {
            let p = Pos::new(row, col);
            if p != start && p != end && rng.random::<f64>() < BARRIER_DENSITY {
                barriers.push(p);
            }
        }
    }
    barriers
}

fn build_grid(start: Pos, end: Pos, barriers: &[Pos]) -> Grid {
    let grid = Grid::new(DIM);
    for &b in barriers {
        grid.set_state(b, CellState::Barrier);
    }
    grid.set_state(start, CellState::Start);
    grid.set_state(end, CellState::End);
    grid.recompute_all_neighbors();
    grid
}

fn render(grid: &Grid) {
    let mut line = String::with_capacity(grid.dim() as usize);
    for (p, state) in grid.iter() {
        line.push(match state {
            CellState::Unvisited => '.',
            CellState::Frontier => 'o',
            CellState::Visited => 'x',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Barrier => '#',
            CellState::Path => '*',
        });
        if p.col == grid.dim() - 1 {
            println!("{line}");
            line.clear();
        }
    }
    println!();
}

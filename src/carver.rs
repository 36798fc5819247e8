use std::collections::HashMap;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::error::MazeError;
use crate::grid::{direction_between, Cell, Direction, Grid};

/// Result of one carver step: either one opened wall, or the terminal marker
/// once the history stack has drained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarveStep {
    Carved {
        from: Cell,
        to: Cell,
        direction: Direction,
    },
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CarverState {
    NotStarted,
    Running,
    Done,
}

/// Randomized depth-first maze generator. Each `step()` opens exactly one
/// wall; pure backtracking happens internally between steps. Because a
/// visited cell is never carved into again, the recorded adjacency is a
/// spanning tree of the grid rooted at the origin.
pub struct Carver {
    grid: Grid,
    adjacency: HashMap<Cell, Vec<Cell>>,
    visited: Vec<bool>,
    history: Vec<Cell>,
    rng: StdRng,
    state: CarverState,
}

impl Carver {
    /// Takes ownership of the grid to carve. A fixed seed reproduces the
    /// same maze; `None` draws from entropy.
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let cells = grid.dims.columns * grid.dims.rows;

        Self {
            grid,
            adjacency: HashMap::new(),
            visited: vec![false; cells],
            history: Vec::new(),
            rng,
            state: CarverState::NotStarted,
        }
    }

    pub fn is_done(&self) -> bool {
        self.state == CarverState::Done
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Carved neighbors per cell, in discovery order. The solver must try
    /// them in exactly this order.
    pub fn adjacency(&self) -> &HashMap<Cell, Vec<Cell>> {
        &self.adjacency
    }

    /// Advances carving by one opened wall, retreating internally past
    /// frontier cells with no unvisited neighbors. Emits `Done` once the
    /// stack empties; stepping again after that fails.
    pub fn step(&mut self) -> Result<CarveStep, MazeError> {
        match self.state {
            CarverState::Done => return Err(MazeError::AlreadyTerminal),
            CarverState::NotStarted => {
                let origin = Cell::new(0, 0);
                self.mark_visited(origin);
                self.history.push(origin);
                self.state = CarverState::Running;
            }
            CarverState::Running => {}
        }

        loop {
            let frontier = match self.history.last() {
                Some(&cell) => cell,
                None => {
                    self.state = CarverState::Done;
                    return Ok(CarveStep::Done);
                }
            };

            let candidates: Vec<Cell> = self
                .grid
                .neighborhood(frontier)
                .map(|(cell, _)| cell)
                .filter(|&cell| !self.is_visited(cell))
                .collect();

            if candidates.is_empty() {
                // dead end, retreat without emitting an edge
                self.history.pop();
                continue;
            }

            let chosen = candidates[self.rng.gen_range(0, candidates.len())];
            let direction = direction_between(frontier, chosen)?;

            self.grid.open_wall(frontier, direction);
            self.adjacency
                .entry(frontier)
                .or_insert_with(Vec::new)
                .push(chosen);
            self.mark_visited(chosen);
            self.history.push(chosen);

            return Ok(CarveStep::Carved {
                from: frontier,
                to: chosen,
                direction,
            });
        }
    }

    #[inline]
    fn is_visited(&self, cell: Cell) -> bool {
        self.visited[(self.grid.dims.columns * cell.row) + cell.column]
    }

    #[inline]
    fn mark_visited(&mut self, cell: Cell) {
        let index = (self.grid.dims.columns * cell.row) + cell.column;
        self.visited[index] = true;
    }
}

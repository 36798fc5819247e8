use std::collections::HashMap;

use crate::carver::Carver;
use crate::error::MazeError;
use crate::grid::Cell;

/// Result of one solver step: one edge traversal, or a terminal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStep {
    Advance { from: Cell, to: Cell },
    Retreat { from: Cell, to: Cell },
    Found,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SolverState {
    NotStarted,
    Running,
    Found,
    Exhausted,
}

/// Depth-first pathfinder over the carved adjacency, from the origin to the
/// far corner. Candidates are tried first-carved-first, so the solved path
/// is deterministic for a fixed maze. `Found` is emitted by the step after
/// the `Advance` that reaches the destination; a 1x1 grid finds on the very
/// first step.
pub struct Solver {
    adjacency: HashMap<Cell, Vec<Cell>>,
    columns: usize,
    visited: Vec<bool>,
    history: Vec<Cell>,
    destination: Cell,
    state: SolverState,
}

impl Solver {
    /// Fails with `MazeNotBuilt` until the carver has finished; the solver
    /// only ever walks passages that were actually carved.
    pub fn new(carver: &Carver) -> Result<Self, MazeError> {
        if !carver.is_done() {
            return Err(MazeError::MazeNotBuilt);
        }

        let columns = carver.grid().dims.columns;
        let rows = carver.grid().dims.rows;

        Ok(Self {
            adjacency: carver.adjacency().clone(),
            columns,
            visited: vec![false; columns * rows],
            history: Vec::new(),
            destination: Cell::new(columns - 1, rows - 1),
            state: SolverState::NotStarted,
        })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, SolverState::Found | SolverState::Exhausted)
    }

    /// The origin-to-destination walk, available once the destination has
    /// been found; empty before that.
    pub fn path(&self) -> &[Cell] {
        match self.state {
            SolverState::Found => &self.history,
            _ => &[],
        }
    }

    /// Advances by one edge: descend into the first untried carved neighbor
    /// of the frontier, or retreat one cell when none remain.
    pub fn step(&mut self) -> Result<SolveStep, MazeError> {
        match self.state {
            SolverState::Found | SolverState::Exhausted => {
                return Err(MazeError::AlreadyTerminal)
            }
            SolverState::NotStarted => {
                let origin = Cell::new(0, 0);
                self.mark_visited(origin);
                self.history.push(origin);
                self.state = SolverState::Running;
            }
            SolverState::Running => {}
        }

        let frontier = match self.history.last() {
            Some(&cell) => cell,
            None => {
                self.state = SolverState::Exhausted;
                return Ok(SolveStep::Exhausted);
            }
        };

        if frontier == self.destination {
            self.state = SolverState::Found;
            return Ok(SolveStep::Found);
        }

        // first carved, first tried
        let next = self
            .adjacency
            .get(&frontier)
            .and_then(|neighbors| neighbors.iter().find(|&&cell| !self.is_visited(cell)))
            .copied();

        match next {
            Some(cell) => {
                self.mark_visited(cell);
                self.history.push(cell);
                Ok(SolveStep::Advance {
                    from: frontier,
                    to: cell,
                })
            }
            None => {
                self.history.pop();
                match self.history.last() {
                    Some(&top) => Ok(SolveStep::Retreat {
                        from: frontier,
                        to: top,
                    }),
                    None => {
                        // cannot happen for a spanning tree, handled anyway
                        self.state = SolverState::Exhausted;
                        Ok(SolveStep::Exhausted)
                    }
                }
            }
        }
    }

    #[inline]
    fn is_visited(&self, cell: Cell) -> bool {
        self.visited[(self.columns * cell.row) + cell.column]
    }

    #[inline]
    fn mark_visited(&mut self, cell: Cell) {
        let index = (self.columns * cell.row) + cell.column;
        self.visited[index] = true;
    }
}

#[cfg(test)]
mod test_solver {
    use super::*;
    use crate::carver::CarveStep;
    use crate::grid::Grid;

    fn carved(columns: usize, rows: usize, seed: u64) -> Carver {
        let grid = Grid::new(columns, rows).unwrap();
        let mut carver = Carver::new(grid, Some(seed));
        while carver.step().unwrap() != CarveStep::Done {}
        carver
    }

    #[test]
    fn requires_a_finished_carver() {
        let grid = Grid::new(3, 3).unwrap();
        let carver = Carver::new(grid, Some(1));

        assert!(matches!(Solver::new(&carver), Err(MazeError::MazeNotBuilt)));

        // half-carved is still not built
        let grid = Grid::new(3, 3).unwrap();
        let mut carver = Carver::new(grid, Some(1));
        carver.step().unwrap();
        assert!(matches!(Solver::new(&carver), Err(MazeError::MazeNotBuilt)));
    }

    #[test]
    fn two_by_one_advances_once_then_finds() {
        let carver = carved(2, 1, 0);
        let mut solver = Solver::new(&carver).unwrap();

        assert_eq!(
            solver.step(),
            Ok(SolveStep::Advance {
                from: Cell::new(0, 0),
                to: Cell::new(1, 0),
            })
        );
        assert_eq!(solver.step(), Ok(SolveStep::Found));
        assert_eq!(solver.step(), Err(MazeError::AlreadyTerminal));
        assert_eq!(solver.path(), &[Cell::new(0, 0), Cell::new(1, 0)]);
    }

    #[test]
    fn single_cell_finds_immediately() {
        let carver = carved(1, 1, 0);
        let mut solver = Solver::new(&carver).unwrap();

        assert_eq!(solver.step(), Ok(SolveStep::Found));
        assert_eq!(solver.path(), &[Cell::new(0, 0)]);
    }

    #[test]
    fn always_finds_the_far_corner() {
        for &seed in &[0, 1, 2, 3, 4] {
            let carver = carved(6, 5, seed);
            let mut solver = Solver::new(&carver).unwrap();

            let mut advances = 0;
            let mut calls = 0;
            let outcome = loop {
                calls += 1;
                assert!(calls <= 2 * 6 * 5 + 1, "seed {} did not terminate", seed);
                match solver.step().unwrap() {
                    SolveStep::Advance { .. } => advances += 1,
                    SolveStep::Retreat { .. } => {}
                    step => break step,
                }
            };

            assert_eq!(outcome, SolveStep::Found, "seed {}", seed);
            assert!(advances >= 1);

            let path = solver.path();
            assert_eq!(path.first(), Some(&Cell::new(0, 0)));
            assert_eq!(path.last(), Some(&Cell::new(5, 4)));
            for pair in path.windows(2) {
                let dc = (pair[0].column as isize - pair[1].column as isize).abs();
                let dr = (pair[0].row as isize - pair[1].row as isize).abs();
                assert_eq!(dc + dr, 1, "path cells must be axis-adjacent");
            }
        }
    }

    #[test]
    fn explores_in_carve_order() {
        let carver = carved(4, 4, 1);
        let expected_first = carver.adjacency()[&Cell::new(0, 0)][0];
        let mut solver = Solver::new(&carver).unwrap();

        assert_eq!(
            solver.step(),
            Ok(SolveStep::Advance {
                from: Cell::new(0, 0),
                to: expected_first,
            })
        );
    }

    #[test]
    fn retreat_reports_the_popped_cell_and_new_top() {
        // find a maze where the solver has to back out of a dead end
        for seed in 0..20 {
            let carver = carved(5, 5, seed);
            let mut solver = Solver::new(&carver).unwrap();

            loop {
                match solver.step().unwrap() {
                    SolveStep::Advance { .. } => {}
                    SolveStep::Retreat { from, to } => {
                        // the retreat target is the parent of the popped cell
                        assert!(carver.adjacency()[&to].contains(&from));
                        return;
                    }
                    SolveStep::Found | SolveStep::Exhausted => break,
                }
            }
        }

        panic!("no maze with a dead end before the goal in 20 seeds");
    }
}

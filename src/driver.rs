use crate::carver::{CarveStep, Carver};
use crate::error::MazeError;
use crate::grid::Grid;
use crate::solver::{SolveStep, Solver};

/// Construction-time configuration. `cell_size` is consumed only by the
/// rendering collaborator; the algorithms never look at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeConfig {
    pub columns: usize,
    pub rows: usize,
    pub cell_size: f32,
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            columns: 17,
            rows: 17,
            cell_size: 32.0,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStep {
    Carve(CarveStep),
    Solve(SolveStep),
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Carving,
    Solving,
    Finished,
}

/// One owned stepper per run. Sequences the carve phase before the solve
/// phase and hands the collaborator one discrete result per call; all pacing
/// between calls belongs to the collaborator.
pub struct Driver {
    config: MazeConfig,
    carver: Carver,
    solver: Option<Solver>,
    phase: Phase,
}

impl Driver {
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        let grid = Grid::new(config.columns, config.rows)?;

        Ok(Self {
            config,
            carver: Carver::new(grid, config.seed),
            solver: None,
            phase: Phase::Carving,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        self.carver.grid()
    }

    pub fn solver(&self) -> Option<&Solver> {
        self.solver.as_ref()
    }

    /// Pulls one discrete step. Carver steps come first; once the carver
    /// reports `Done` the solver is built and takes over. After the solver
    /// terminates every further call returns `Finished`.
    pub fn step(&mut self) -> Result<DriverStep, MazeError> {
        match self.phase {
            Phase::Carving => {
                let step = self.carver.step()?;
                if step == CarveStep::Done {
                    self.solver = Some(Solver::new(&self.carver)?);
                    self.phase = Phase::Solving;
                }
                Ok(DriverStep::Carve(step))
            }
            Phase::Solving => {
                let solver = match self.solver.as_mut() {
                    Some(solver) => solver,
                    None => return Err(MazeError::MazeNotBuilt),
                };

                let step = solver.step()?;
                if let SolveStep::Found | SolveStep::Exhausted = step {
                    self.phase = Phase::Finished;
                }
                Ok(DriverStep::Solve(step))
            }
            Phase::Finished => Ok(DriverStep::Finished),
        }
    }
}

use thiserror::Error;

use crate::grid::Cell;

/// Failures surfaced by the maze core. All of these reach the driver as
/// typed results; none are printed-and-ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Fatal at construction: a grid needs at least one column and one row.
    #[error("grid dimensions must be positive, got {columns}x{rows}")]
    InvalidDimension { columns: usize, rows: usize },

    /// Internal invariant violation: a carve target that is not axis-adjacent
    /// to the frontier cell indicates a bug in neighbor selection.
    #[error("cells {from} and {to} are not axis-adjacent")]
    NotAdjacent { from: Cell, to: Cell },

    /// The solver was constructed before the carver finished. Recoverable:
    /// run the carver to completion first.
    #[error("maze is not fully carved yet")]
    MazeNotBuilt,

    /// `step()` was called on a state machine that already reached its
    /// terminal state. Recoverable: stop stepping.
    #[error("step() called on a finished state machine")]
    AlreadyTerminal,
}

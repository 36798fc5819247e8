//! Step-driven maze carving and solving on a rectangular grid.
//!
//! The core is two resumable state machines sharing one grid: a [`Carver`]
//! that cuts a perfect maze with randomized depth-first search, and a
//! [`Solver`] that walks the carved passages depth-first from the origin to
//! the far corner. Neither blocks or owns any timing; an external driver
//! pulls one discrete step at a time and maps the returned events to
//! whatever rendering it likes.

pub mod carver;
pub mod driver;
pub mod error;
pub mod grid;
pub mod solver;

pub use carver::{CarveStep, Carver};
pub use driver::{Driver, DriverStep, MazeConfig};
pub use error::MazeError;
pub use grid::{Cell, Direction, Grid, WallEvent};
pub use solver::{SolveStep, Solver};

use std::fmt;

use crate::error::MazeError;

/// One grid position, addressed as (column, row) with row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

impl Direction {
    #[inline]
    fn bit(self) -> u8 {
        match self {
            Direction::North => 1 << 0,
            Direction::South => 1 << 1,
            Direction::East => 1 << 2,
            Direction::West => 1 << 3,
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Compass direction from `from` to an axis-adjacent `to`. Exactly one of the
/// four cases must match; anything else is a contract violation.
pub fn direction_between(from: Cell, to: Cell) -> Result<Direction, MazeError> {
    if from.column == to.column && from.row == to.row + 1 {
        Ok(Direction::North)
    } else if from.column == to.column && from.row + 1 == to.row {
        Ok(Direction::South)
    } else if from.row == to.row && from.column + 1 == to.column {
        Ok(Direction::East)
    } else if from.row == to.row && from.column == to.column + 1 {
        Ok(Direction::West)
    } else {
        Err(MazeError::NotAdjacent { from, to })
    }
}

/// Wall-state-changed notification handed to the rendering collaborator.
/// Every `open_wall` call produces exactly one of these, so the visual and
/// logical wall states never diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallEvent {
    pub cell: Cell,
    pub direction: Direction,
    pub is_open: bool,
}

pub struct Dimensions {
    pub columns: usize,
    pub rows: usize,
}

pub struct Grid {
    pub dims: Dimensions,

    /// four wall bits per cell, set = open
    walls: Vec<u8>,
}

impl Grid {
    /// A grid with every wall closed.
    pub fn new(columns: usize, rows: usize) -> Result<Self, MazeError> {
        if columns == 0 || rows == 0 {
            return Err(MazeError::InvalidDimension { columns, rows });
        }

        Ok(Self {
            walls: vec![0; columns * rows],
            dims: Dimensions { columns, rows },
        })
    }

    #[inline]
    fn index_of(&self, cell: Cell) -> usize {
        (self.dims.columns * cell.row) + cell.column
    }

    #[inline]
    pub fn is_open(&self, cell: Cell, direction: Direction) -> bool {
        self.walls[self.index_of(cell)] & direction.bit() != 0
    }

    /// Opens `direction` for `cell`. Walls are shared: when the neighbor in
    /// that direction is in bounds its matching side opens too, so the two
    /// sides can never disagree. On the grid boundary only the initiating
    /// side exists. Reopening an open wall is a no-op that still reports a
    /// duplicate event.
    pub fn open_wall(&mut self, cell: Cell, direction: Direction) -> WallEvent {
        let index = self.index_of(cell);
        self.walls[index] |= direction.bit();

        if let Some(neighbor) = self.neighbor_in_bounds(cell, direction) {
            let index = self.index_of(neighbor);
            self.walls[index] |= (-direction).bit();
        }

        WallEvent {
            cell,
            direction,
            is_open: true,
        }
    }

    /// The adjacent coordinate in `direction`, or `None` when it would leave
    /// the grid.
    pub fn neighbor_in_bounds(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let Cell { column, row } = cell;

        match direction {
            Direction::North if row > 0 => Some(Cell::new(column, row - 1)),
            Direction::South if row + 1 < self.dims.rows => Some(Cell::new(column, row + 1)),
            Direction::East if column + 1 < self.dims.columns => Some(Cell::new(column + 1, row)),
            Direction::West if column > 0 => Some(Cell::new(column - 1, row)),
            _ => None,
        }
    }

    pub fn neighborhood(&self, cell: Cell) -> Neighborhood {
        Neighborhood {
            north: self.neighbor_in_bounds(cell, Direction::North),
            south: self.neighbor_in_bounds(cell, Direction::South),
            east: self.neighbor_in_bounds(cell, Direction::East),
            west: self.neighbor_in_bounds(cell, Direction::West),
            cursor: 0,
        }
    }
}

/// In-bounds neighbors of one cell, yielded in fixed N, S, E, W order.
#[derive(Debug, Clone, Copy)]
pub struct Neighborhood {
    pub north: Option<Cell>,
    pub south: Option<Cell>,
    pub east: Option<Cell>,
    pub west: Option<Cell>,

    cursor: usize,
}

impl Iterator for Neighborhood {
    type Item = (Cell, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < DIRECTIONS.len() {
            let direction = DIRECTIONS[self.cursor];
            self.cursor += 1;

            let slot = match direction {
                Direction::North => self.north,
                Direction::South => self.south,
                Direction::East => self.east,
                Direction::West => self.west,
            };

            if let Some(cell) = slot {
                return Some((cell, direction));
            }
        }

        None
    }
}

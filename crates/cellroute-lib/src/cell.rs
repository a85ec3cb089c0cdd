//! Grid cells and the geometric lower bound used by A*.
//!
//! Every node lives inside one cell of a 10x10 grid. A cell id encodes its
//! position: a single-digit id sits in row 0 with the digit as its column, a
//! two-digit id uses the tens digit as the row and the units digit as the
//! column. Cells are `CELL_SIZE` units square.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Number of rows (and columns) in the grid.
pub const GRID_DIMENSION: u8 = 10;

/// Side length of a single cell in distance units.
pub const CELL_SIZE: f64 = 100.0;

/// Validated cell identifier in the range `0..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cell(u8);

impl Cell {
    /// Largest valid cell id.
    pub const MAX_ID: u8 = GRID_DIMENSION * GRID_DIMENSION - 1;

    /// Validate a raw cell id.
    pub fn new(id: i64) -> Result<Self> {
        u8::try_from(id)
            .ok()
            .filter(|id| *id <= Self::MAX_ID)
            .map(Cell)
            .ok_or(Error::InvalidCell { cell: id })
    }

    /// Raw cell id.
    pub fn id(self) -> u8 {
        self.0
    }

    /// Grid row, the tens digit of the id.
    pub fn row(self) -> u8 {
        self.0 / GRID_DIMENSION
    }

    /// Grid column, the units digit of the id.
    pub fn column(self) -> u8 {
        self.0 % GRID_DIMENSION
    }

    /// Lower-left corner of the cell in distance units, as `(x, y)`.
    pub fn origin(self) -> (f64, f64) {
        (
            f64::from(self.column()) * CELL_SIZE,
            f64::from(self.row()) * CELL_SIZE,
        )
    }

    /// Smallest possible straight-line distance between any point in `self`
    /// and any point in `other`.
    ///
    /// Points in the same or neighbouring rows (columns) can be arbitrarily
    /// close on that axis, so only the cells strictly between the two count
    /// towards the separation.
    pub fn lower_bound_distance(&self, other: &Self) -> f64 {
        let dx = axis_separation(self.column(), other.column());
        let dy = axis_separation(self.row(), other.row());
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Admissible estimate of the remaining distance from `from` to `to`.
pub fn estimate(from: Cell, to: Cell) -> f64 {
    from.lower_bound_distance(&to)
}

fn axis_separation(a: u8, b: u8) -> f64 {
    match a.abs_diff(b) {
        0 => 0.0,
        delta => f64::from(delta - 1) * CELL_SIZE,
    }
}

use error_chain::bail;
use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec};
use crate::errors::*;
use crate::units::{ColumnIndex, GridSide, RowIndex};

/// State of one grid cell.
///
/// At rest (JSON) a passage is `0` and a wall is `1`. That numeric polarity only exists in
/// `CellState::as_bit` / `CellState::from_bit`, everything else works with the enum.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum CellState {
    Passage,
    Wall,
}

impl CellState {
    #[inline]
    pub fn as_bit(self) -> u8 {
        match self {
            CellState::Passage => 0,
            CellState::Wall => 1,
        }
    }

    #[inline]
    pub fn from_bit(bit: u8) -> Option<CellState> {
        match bit {
            0 => Some(CellState::Passage),
            1 => Some(CellState::Wall),
            _ => None,
        }
    }
}

/// Square grid of passages and walls, stored row major.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct BinaryGrid {
    cells: Vec<CellState>,
    side: usize,
}

impl BinaryGrid {
    /// A `side` x `side` grid with every cell set to `fill`.
    pub fn new(side: GridSide, fill: CellState) -> Result<BinaryGrid> {
        let GridSide(side) = side;
        if side == 0 {
            return Err(ErrorKind::InvalidMaze("a maze needs at least one cell".to_string()).into());
        }
        Ok(BinaryGrid {
            cells: vec![fill; side * side],
            side,
        })
    }

    /// Build a grid from rows of `0` (passage) and `1` (wall).
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<BinaryGrid> {
        let side = rows.len();
        if side == 0 {
            bail!(ErrorKind::InvalidMaze("the maze has no rows".to_string()));
        }

        let mut cells = Vec::with_capacity(side * side);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != side {
                bail!(ErrorKind::InvalidMaze(format!("row {} has {} cells but the maze has {} rows, \
                                                      the maze must be square",
                                                     y,
                                                     row.len(),
                                                     side)));
            }
            for (x, bit) in row.iter().enumerate() {
                let state = CellState::from_bit(*bit).ok_or_else(|| {
                    ErrorKind::InvalidMaze(format!("cell ({}, {}) is {}, expected 0 or 1", x, y, bit))
                })?;
                cells.push(state);
            }
        }

        Ok(BinaryGrid { cells, side })
    }

    /// Parse the JSON array of arrays layout.
    pub fn from_json_str(json: &str) -> Result<BinaryGrid> {
        let rows: Vec<Vec<u8>> = serde_json::from_str(json)
            .chain_err(|| ErrorKind::InvalidMaze("expected a json array of arrays of 0 and 1".to_string()))?;
        BinaryGrid::from_rows(&rows)
    }

    /// Rows of `0` (passage) and `1` (wall).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.side)
            .map(|row| row.iter().map(|state| state.as_bit()).collect())
            .collect()
    }

    /// JSON layout with one row per line.
    pub fn to_json_rows(&self) -> String {
        let rows = self.to_rows()
            .iter()
            .map(|row| format!("  [{}]", row.iter().join(", ")))
            .join(",\n");
        format!("[\n{}\n]", rows)
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: Cartesian2DCoordinate) -> bool {
        (coord.x as usize) < self.side && (coord.y as usize) < self.side
    }

    /// Cell state, or None if the coordinate is outside the grid.
    #[inline]
    pub fn get(&self, coord: Cartesian2DCoordinate) -> Option<CellState> {
        self.grid_coordinate_to_index(coord).map(|i| self.cells[i])
    }

    /// Set a cell state. Returns false if the coordinate is outside the grid.
    pub fn set(&mut self, coord: Cartesian2DCoordinate, state: CellState) -> bool {
        if let Some(i) = self.grid_coordinate_to_index(coord) {
            self.cells[i] = state;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn is_passage(&self, coord: Cartesian2DCoordinate) -> bool {
        self.get(coord) == Some(CellState::Passage)
    }

    /// Passage cells to the North, South, East or West of `coord`.
    pub fn passable_neighbours(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        coord.neighbours_within(self.side, 1)
            .into_iter()
            .filter(|c| self.is_passage(*c))
            .collect()
    }

    pub fn passages_count(&self) -> usize {
        self.cells.iter().filter(|s| **s == CellState::Passage).count()
    }

    /// Row major iteration over every coordinate.
    pub fn iter(&self) -> impl Iterator<Item = Cartesian2DCoordinate> {
        let side = self.side;
        (0..side * side).map(move |i| {
            Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(i % side), RowIndex(i / side))
        })
    }

    /// Rows of (coordinate, state) pairs, top row first.
    pub fn iter_row(&self) -> impl Iterator<Item = Vec<(Cartesian2DCoordinate, CellState)>> + '_ {
        self.cells.chunks(self.side).enumerate().map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, state)| {
                    (Cartesian2DCoordinate::from_row_column_indices(ColumnIndex(x), RowIndex(y)), *state)
                })
                .collect()
        })
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    #[inline]
    fn grid_coordinate_to_index(&self, coord: Cartesian2DCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.y as usize * self.side + coord.x as usize)
        } else {
            None
        }
    }
}

impl TryFrom<Vec<Vec<u8>>> for BinaryGrid {
    type Error = Error;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<BinaryGrid> {
        BinaryGrid::from_rows(&rows)
    }
}

impl From<BinaryGrid> for Vec<Vec<u8>> {
    fn from(grid: BinaryGrid) -> Vec<Vec<u8>> {
        grid.to_rows()
    }
}

/// Walls as `#`, passages as spaces, inside a `+---+` box.
impl fmt::Display for BinaryGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let horizontal_boundary = format!("+{}+", "-".repeat(self.side * 2 - 1));
        writeln!(f, "{}", horizontal_boundary)?;
        for row in self.cells.chunks(self.side) {
            let body = row.iter()
                .map(|state| match *state {
                    CellState::Passage => " ",
                    CellState::Wall => "#",
                })
                .join(" ");
            writeln!(f, "|{}|", body)?;
        }
        writeln!(f, "{}", horizontal_boundary)
    }
}

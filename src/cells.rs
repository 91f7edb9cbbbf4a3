use smallvec::SmallVec;
use std::convert::From;
use std::fmt;

use crate::units::{ColumnIndex, RowIndex};

/// A cell position on a square grid. `x` is the column, `y` is the row.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// The order neighbours are always visited in. Generation consumes random numbers against this
/// order so changing it changes every seeded maze.
pub const COMPASS_PRIMARY_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                             CompassPrimary::South,
                                                             CompassPrimary::East,
                                                             CompassPrimary::West];

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    #[inline]
    pub fn from_row_column_indices(col_index: ColumnIndex, row_index: RowIndex) -> Self {
        let (ColumnIndex(col), RowIndex(row)) = (col_index, row_index);
        Cartesian2DCoordinate::new(col as u32, row as u32)
    }

    /// Creates a new coordinate offset `step` cells away in the given direction.
    /// Returns None if the result would be negative. The far side of the grid is not checked.
    pub fn offset(self, dir: CompassPrimary, step: u32) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        match dir {
            CompassPrimary::North => y.checked_sub(step).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::South => y.checked_add(step).map(|y| Cartesian2DCoordinate { x, y }),
            CompassPrimary::East => x.checked_add(step).map(|x| Cartesian2DCoordinate { x, y }),
            CompassPrimary::West => x.checked_sub(step).map(|x| Cartesian2DCoordinate { x, y }),
        }
    }

    /// The coordinates `step` cells away in each compass direction that stay inside a square of
    /// `side` cells.
    pub fn neighbours_within(self, side: usize, step: u32) -> CoordinateSmallVec {
        COMPASS_PRIMARY_DIRECTIONS.iter()
            .filter_map(|dir| self.offset(*dir, step))
            .filter(|c| (c.x as usize) < side && (c.y as usize) < side)
            .collect()
    }

    /// Sum of the axis distances between two coordinates.
    pub fn manhattan_distance(self, other: Cartesian2DCoordinate) -> u32 {
        let dx = if self.x > other.x { self.x - other.x } else { other.x - self.x };
        let dy = if self.y > other.y { self.y - other.y } else { other.y - self.y };
        dx + dy
    }

    /// Are the two coordinates one step apart horizontally or vertically?
    pub fn is_adjacent(self, other: Cartesian2DCoordinate) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

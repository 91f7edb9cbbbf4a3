/// Number of logical cells (rooms) along one side of a maze.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct LogicalSide(pub usize);

/// Number of grid cells along one side of a maze, walls and gaps included.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridSide(pub usize);

impl From<LogicalSide> for GridSide {
    /// Rooms sit on even indices with a wall or gap cell between each pair.
    fn from(side: LogicalSide) -> GridSide {
        GridSide((2 * side.0).saturating_sub(1))
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowIndex(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnIndex(pub usize);

use crate::cells::Cartesian2DCoordinate;
use crate::grid::{BinaryGrid, CellState};
use crate::pathing::{Locations, SearchResult};
use crate::utils::FnvHashSet;

pub trait GridDisplay {
    /// Render the contents of a passage cell as text.
    /// The String should be 3 glyphs long, padded if required.
    fn render_cell_body(&self, _: Cartesian2DCoordinate) -> String {
        String::from("   ")
    }
}

/// Draw the grid in a box with walls as `---` and passages rendered by `display`.
pub fn render_grid(grid: &BinaryGrid, display: &dyn GridDisplay) -> String {
    let horizontal_boundary = format!("+{}+\n", "-".repeat(grid.side() * 3));

    let mut output = horizontal_boundary.clone();
    for row in grid.iter_row() {
        output.push('|');
        for (coord, state) in row {
            match state {
                CellState::Wall => output.push_str("---"),
                CellState::Passage => output.push_str(&display.render_cell_body(coord)),
            }
        }
        output.push_str("|\n");
    }
    output.push_str(&horizontal_boundary);
    output
}

/// Plain passages, nothing marked.
#[derive(Debug, Copy, Clone)]
pub struct EmptyDisplay;
impl GridDisplay for EmptyDisplay {}

impl GridDisplay for Locations {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        if let Some(d) = self.distance_to(coord) {
            // centre align, padding 3, decimal
            format!("{:^3}", d)
        } else {
            String::from("   ")
        }
    }
}

impl GridDisplay for SearchResult {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        self.locations().render_cell_body(coord)
    }
}

#[derive(Debug)]
pub struct PathDisplay {
    on_path_coordinates: FnvHashSet<Cartesian2DCoordinate>,
    start: Option<Cartesian2DCoordinate>,
    end: Option<Cartesian2DCoordinate>,
}
impl PathDisplay {
    /// `path` in either direction; its first and last cells are marked `S` and `E` respectively.
    pub fn new(path: &[Cartesian2DCoordinate]) -> Self {
        PathDisplay {
            on_path_coordinates: path.iter().cloned().collect(),
            start: path.first().cloned(),
            end: path.last().cloned(),
        }
    }
}
impl GridDisplay for PathDisplay {
    fn render_cell_body(&self, coord: Cartesian2DCoordinate) -> String {
        if self.start == Some(coord) {
            String::from(" S ")
        } else if self.end == Some(coord) {
            String::from(" E ")
        } else if self.on_path_coordinates.contains(&coord) {
            String::from(" . ")
        } else {
            String::from("   ")
        }
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use crate::pathing::MazeSolver;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn empty_display() {
        let g = BinaryGrid::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        assert_eq!(render_grid(&g, &EmptyDisplay),
                   "+------+\n|   ---|\n|      |\n+------+\n");
    }

    #[test]
    fn distances_display() {
        let g = BinaryGrid::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        let result = MazeSolver::new(&g).solve();
        assert_eq!(render_grid(&g, &result),
                   "+------+\n| 0 ---|\n| 1  2 |\n+------+\n");
    }

    #[test]
    fn unreached_cells_are_blank() {
        let g = BinaryGrid::from_rows(&[vec![0, 1, 0], vec![1, 1, 0], vec![0, 0, 0]]).unwrap();
        let result = MazeSolver::new(&g).solve();
        assert!(!result.is_solved());
        assert_eq!(render_grid(&g, result.locations()),
                   "+---------+\n| 0 ---   |\n|------   |\n|         |\n+---------+\n");
    }

    #[test]
    fn path_display_marks_ends() {
        let g = BinaryGrid::from_rows(&[vec![0, 0], vec![1, 0]]).unwrap();
        let path = [gc(0, 0), gc(1, 0), gc(1, 1)];
        let display = PathDisplay::new(&path);
        assert_eq!(display.render_cell_body(gc(0, 0)), " S ");
        assert_eq!(display.render_cell_body(gc(1, 0)), " . ");
        assert_eq!(display.render_cell_body(gc(1, 1)), " E ");
        assert_eq!(render_grid(&g, &display),
                   "+------+\n| S  . |\n|--- E |\n+------+\n");
    }
}

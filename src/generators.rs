use bit_set::BitSet;
use error_chain::bail;
use log::{debug, info, trace};
use petgraph::unionfind::UnionFind;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec};
use crate::errors::*;
use crate::grid::{BinaryGrid, CellState};
use crate::units::{GridSide, LogicalSide};

/// How the growing tree algorithm picks the frontier cell to extend next.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum FrontierStrategy {
    /// The most recently carved cell. Depth first, long winding corridors.
    MostRecent,
    /// A uniformly random frontier cell. More branching and shorter corridors.
    Random,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GenerationStats {
    pub seed: u64,
    /// Passages carved between two logical cells. Always `side * side - 1` once finished.
    pub connections: usize,
    pub iterations: usize,
}

#[derive(Clone, Debug)]
pub struct GeneratedMaze {
    pub grid: BinaryGrid,
    pub stats: GenerationStats,
}

/// Carves a perfect maze with the growing tree algorithm.
///
/// Logical cells (rooms) live on the even coordinates of a `(2S - 1) x (2S - 1)` grid that starts
/// all wall. Joining two rooms opens the target room and the wall cell between them. Each logical
/// cell goes unvisited -> frontier -> done exactly once, so the carved passages form a spanning
/// tree over the rooms.
#[derive(Debug)]
pub struct MazeGenerator {
    side: usize,
    strategy: FrontierStrategy,
    rng: XorShiftRng,
    grid: BinaryGrid,
    frontier: Vec<Cartesian2DCoordinate>,
    unvisited: BitSet,
    stats: GenerationStats,
}

impl MazeGenerator {
    /// A generator seeded from entropy. The seed is logged and kept in the stats so a maze can be
    /// reproduced with `with_seed`.
    pub fn new(side: LogicalSide, strategy: FrontierStrategy) -> Result<MazeGenerator> {
        let seed = rand::random::<u64>();
        info!("Generating maze with seed {}", seed);
        MazeGenerator::with_seed(side, strategy, seed)
    }

    pub fn with_seed(side: LogicalSide, strategy: FrontierStrategy, seed: u64) -> Result<MazeGenerator> {
        let LogicalSide(logical_side) = side;
        if logical_side == 0 || logical_side > (u32::MAX / 2) as usize {
            bail!(ErrorKind::InvalidSideLength(logical_side));
        }

        let mut grid = BinaryGrid::new(GridSide::from(side), CellState::Wall)?;
        let origin = Cartesian2DCoordinate::new(0, 0);
        grid.set(origin, CellState::Passage);

        let logical_cells_count = logical_side * logical_side;
        let mut unvisited = BitSet::with_capacity(logical_cells_count);
        for index in 1..logical_cells_count {
            unvisited.insert(index);
        }

        Ok(MazeGenerator {
            side: logical_side,
            strategy,
            rng: XorShiftRng::seed_from_u64(seed),
            grid,
            frontier: vec![origin],
            unvisited,
            stats: GenerationStats {
                seed,
                connections: 0,
                iterations: 0,
            },
        })
    }

    pub fn generate(self) -> GeneratedMaze {
        self.generate_with(|_| {})
    }

    /// Generate, calling `observer` with the grid before the first step and after every carve.
    /// The observer only watches, it has no effect on the maze.
    pub fn generate_with<F>(mut self, mut observer: F) -> GeneratedMaze
        where F: FnMut(&BinaryGrid)
    {
        observer(&self.grid);

        while !self.frontier.is_empty() {
            self.stats.iterations += 1;

            let current_index = match self.strategy {
                FrontierStrategy::MostRecent => self.frontier.len() - 1,
                FrontierStrategy::Random => self.rng.gen::<usize>() % self.frontier.len(),
            };
            let current = self.frontier[current_index];

            let neighbours = self.unvisited_neighbours(current);
            if neighbours.is_empty() {
                // Done. Order only matters for MostRecent, where this is the last element.
                self.frontier.swap_remove(current_index);
                trace!("Retired {} from the frontier", current);
                continue;
            }

            let next = neighbours[self.rng.gen::<usize>() % neighbours.len()];
            self.connect(current, next);
            observer(&self.grid);
        }

        debug!("Carved {} connections in {} iterations",
               self.stats.connections,
               self.stats.iterations);

        GeneratedMaze {
            grid: self.grid,
            stats: self.stats,
        }
    }

    fn unvisited_neighbours(&self, logical_coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        logical_coord.neighbours_within(self.side, 1)
            .into_iter()
            .filter(|c| self.unvisited.contains(self.logical_index(*c)))
            .collect()
    }

    fn connect(&mut self, from: Cartesian2DCoordinate, to: Cartesian2DCoordinate) {
        let room = Cartesian2DCoordinate::new(to.x * 2, to.y * 2);
        // Midpoint of (2a, 2b) and (2c, 2d) in the doubled grid.
        let gap = Cartesian2DCoordinate::new(from.x + to.x, from.y + to.y);
        self.grid.set(room, CellState::Passage);
        self.grid.set(gap, CellState::Passage);

        let to_index = self.logical_index(to);
        self.unvisited.remove(to_index);
        self.frontier.push(to);
        self.stats.connections += 1;
        trace!("Connected {} to {}", from, to);
    }

    #[inline]
    fn logical_index(&self, logical_coord: Cartesian2DCoordinate) -> usize {
        logical_coord.y as usize * self.side + logical_coord.x as usize
    }
}

/// Is `grid` a perfect maze in the doubled coordinate layout `MazeGenerator` carves?
///
/// Rooms (even, even) must be open, pillars (odd, odd) closed, and the open gaps between rooms
/// must join the `S * S` rooms into a single tree: exactly `S * S - 1` gaps with none closing a
/// cycle.
pub fn is_perfect_maze(grid: &BinaryGrid) -> bool {
    let side = grid.side();
    if side % 2 == 0 {
        return false;
    }
    let logical_side = (side + 1) / 2;
    let room_index = |x: u32, y: u32| (y as usize / 2) * logical_side + (x as usize / 2);

    let mut rooms = UnionFind::<usize>::new(logical_side * logical_side);
    let mut gaps = 0;

    for coord in grid.iter() {
        let (x, y) = (coord.x, coord.y);
        let open = grid.is_passage(coord);
        match (x % 2 == 1, y % 2 == 1) {
            (false, false) if !open => return false,
            (true, true) if open => return false,
            (true, false) if open => {
                if !rooms.union(room_index(x - 1, y), room_index(x + 1, y)) {
                    return false;
                }
                gaps += 1;
            }
            (false, true) if open => {
                if !rooms.union(room_index(x, y - 1), room_index(x, y + 1)) {
                    return false;
                }
                gaps += 1;
            }
            _ => {}
        }
    }

    gaps == logical_side * logical_side - 1
}

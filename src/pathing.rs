use log::{debug, info, trace, warn};
use std::collections::VecDeque;

use crate::cells::Cartesian2DCoordinate;
use crate::errors::*;
use crate::grid::BinaryGrid;
use crate::utils::{self, FnvHashMap, FnvHashSet};

/// Default bound on expanded cells before a search gives up.
pub const DEFAULT_ITERATION_CAP: usize = 1_000_000;

/// How the active queue is ordered after every expansion.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum SearchMode {
    /// Priority `distance + (2N - (x + y))`: confirmed distance plus a straight run to the bottom
    /// right corner. A heuristic best-first search, the ordering was never meant as a proof of
    /// optimality.
    Heuristic,
    /// Priority `distance` only. Breadth first, every recorded distance is a shortest distance.
    Exact,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct SolverConfig {
    pub mode: SearchMode,
    /// Maximum number of cells expanded before the search is abandoned.
    pub iteration_cap: usize,
}

impl Default for SolverConfig {
    fn default() -> SolverConfig {
        SolverConfig {
            mode: SearchMode::Heuristic,
            iteration_cap: DEFAULT_ITERATION_CAP,
        }
    }
}

/// What the search knows about one cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct LocationRecord {
    /// Hops from the start along the discovered path.
    pub distance: Option<u32>,
    /// Predecessor on the discovered path, None for the start.
    pub previous: Option<Cartesian2DCoordinate>,
    /// Order the cell was finalized in. None until the cell is finalized.
    pub iteration: Option<usize>,
}

/// Location records keyed by coordinate. Created on first touch, never removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Locations {
    records: FnvHashMap<Cartesian2DCoordinate, LocationRecord>,
}

impl Locations {
    fn with_capacity(capacity: usize) -> Locations {
        Locations { records: utils::fnv_hashmap(capacity) }
    }

    #[inline]
    fn entry(&mut self, coord: Cartesian2DCoordinate) -> &mut LocationRecord {
        self.records.entry(coord).or_insert_with(LocationRecord::default)
    }

    #[inline]
    pub fn get(&self, coord: Cartesian2DCoordinate) -> Option<&LocationRecord> {
        self.records.get(&coord)
    }

    #[inline]
    pub fn distance_to(&self, coord: Cartesian2DCoordinate) -> Option<u32> {
        self.get(coord).and_then(|r| r.distance)
    }

    #[inline]
    pub fn is_finalized(&self, coord: Cartesian2DCoordinate) -> bool {
        self.get(coord).map_or(false, |r| r.iteration.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Cartesian2DCoordinate, &LocationRecord)> {
        self.records.iter()
    }

    /// Number of cells with a record.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Follow `previous` links from `end` until a cell without a predecessor. The result runs
    /// from `end` back to the root of the predecessor tree.
    fn walk_back_from(&self, end: Cartesian2DCoordinate) -> Vec<Cartesian2DCoordinate> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(previous) = self.get(current).and_then(|r| r.previous) {
            // predecessors are finalized cells, the chain is at most one record long per cell
            if path.len() > self.records.len() {
                break;
            }
            path.push(previous);
            current = previous;
        }
        path
    }
}

#[derive(Eq, PartialEq, Clone, Debug)]
pub enum SearchOutcome {
    /// Path from the end cell back to the start cell.
    Found(Vec<Cartesian2DCoordinate>),
    /// The queue emptied without reaching the end cell.
    NoSolution,
    /// The search gave up after expanding this many cells.
    IterationCapExceeded(usize),
}

/// Outcome of one search plus everything it recorded on the way.
#[derive(Clone, Debug)]
pub struct SearchResult {
    outcome: SearchOutcome,
    locations: Locations,
    iterations: usize,
    start: Cartesian2DCoordinate,
    end: Cartesian2DCoordinate,
}

impl SearchResult {
    #[inline]
    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn is_solved(&self) -> bool {
        match self.outcome {
            SearchOutcome::Found(_) => true,
            _ => false,
        }
    }

    /// Path from the end cell back to the start cell, if one was found.
    pub fn path(&self) -> Option<&[Cartesian2DCoordinate]> {
        match self.outcome {
            SearchOutcome::Found(ref path) => Some(path),
            _ => None,
        }
    }

    /// Path from the start cell to the end cell, if one was found.
    pub fn path_from_start(&self) -> Option<Vec<Cartesian2DCoordinate>> {
        self.path().map(|path| path.iter().rev().cloned().collect())
    }

    #[inline]
    pub fn distance_to(&self, coord: Cartesian2DCoordinate) -> Option<u32> {
        self.locations.distance_to(coord)
    }

    #[inline]
    pub fn record(&self, coord: Cartesian2DCoordinate) -> Option<&LocationRecord> {
        self.locations.get(coord)
    }

    #[inline]
    pub fn is_finalized(&self, coord: Cartesian2DCoordinate) -> bool {
        self.locations.is_finalized(coord)
    }

    #[inline]
    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Number of cells finalized.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[inline]
    pub fn start(&self) -> Cartesian2DCoordinate {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Cartesian2DCoordinate {
        self.end
    }

    /// The end to start path, or the reason there isn't one.
    pub fn into_path(self) -> Result<Vec<Cartesian2DCoordinate>> {
        match self.outcome {
            SearchOutcome::Found(path) => Ok(path),
            SearchOutcome::NoSolution => Err(ErrorKind::NoSolution.into()),
            SearchOutcome::IterationCapExceeded(cap) => Err(ErrorKind::IterationCapExceeded(cap).into()),
        }
    }
}

/// Best-first search from the top left to the bottom right cell of a grid.
///
/// All search state lives in the solver and `solve` consumes it, one solver per maze.
#[derive(Debug)]
pub struct MazeSolver<'g> {
    grid: &'g BinaryGrid,
    config: SolverConfig,
    start: Cartesian2DCoordinate,
    end: Cartesian2DCoordinate,
    locations: Locations,
    queue: VecDeque<Cartesian2DCoordinate>,
    queued: FnvHashSet<Cartesian2DCoordinate>,
}

impl<'g> MazeSolver<'g> {
    pub fn new(grid: &'g BinaryGrid) -> MazeSolver<'g> {
        MazeSolver::with_config(grid, SolverConfig::default())
    }

    /// The start cell always gets a distance 0 record, but it is only queued when it is a
    /// passage. A walled start, e.g. the one cell grid `[[1]]`, solves to
    /// `SearchOutcome::NoSolution` without expanding anything.
    pub fn with_config(grid: &'g BinaryGrid, config: SolverConfig) -> MazeSolver<'g> {
        let last = (grid.side() - 1) as u32;
        let start = Cartesian2DCoordinate::new(0, 0);
        let end = Cartesian2DCoordinate::new(last, last);

        let mut locations = Locations::with_capacity(grid.size());
        locations.entry(start).distance = Some(0);

        let mut queue = VecDeque::new();
        let mut queued = utils::fnv_hashset(grid.size());
        // A walled in start can't lead anywhere, the search ends with no solution.
        if grid.is_passage(start) {
            queue.push_back(start);
            queued.insert(start);
        }

        MazeSolver {
            grid,
            config,
            start,
            end,
            locations,
            queue,
            queued,
        }
    }

    pub fn solve(self) -> SearchResult {
        self.solve_with(|_, _| {})
    }

    /// Solve, calling `observer` with each cell as it is finalized and the records so far.
    pub fn solve_with<F>(mut self, mut observer: F) -> SearchResult
        where F: FnMut(Cartesian2DCoordinate, &Locations)
    {
        let mut iteration = 0;

        while let Some(current) = self.queue.pop_front() {
            self.queued.remove(&current);
            if self.locations.is_finalized(current) {
                continue;
            }

            if current == self.end {
                self.locations.entry(current).iteration = Some(iteration);
                observer(current, &self.locations);
                let path = self.locations.walk_back_from(self.end);
                info!("Found a path of {} steps after {} iterations",
                      path.len() - 1,
                      iteration + 1);
                return self.finish(SearchOutcome::Found(path), iteration + 1);
            }

            if iteration >= self.config.iteration_cap {
                warn!("Giving up the search after {} iterations", iteration);
                let cap = self.config.iteration_cap;
                return self.finish(SearchOutcome::IterationCapExceeded(cap), iteration);
            }

            let candidate_distance = match self.locations.distance_to(current) {
                Some(d) => d + 1,
                None => continue,
            };
            trace!("Expanding {} at distance {}", current, candidate_distance - 1);

            for neighbour in self.grid.passable_neighbours(current) {
                if self.locations.is_finalized(neighbour) {
                    continue;
                }
                let record = self.locations.entry(neighbour);
                if let Some(known) = record.distance {
                    if known < candidate_distance {
                        continue;
                    }
                }
                record.distance = Some(candidate_distance);
                record.previous = Some(current);
                if self.queued.insert(neighbour) {
                    self.queue.push_back(neighbour);
                }
            }

            self.sort_queue();

            self.locations.entry(current).iteration = Some(iteration);
            iteration += 1;
            observer(current, &self.locations);
        }

        debug!("No solution found after {} iterations", iteration);
        self.finish(SearchOutcome::NoSolution, iteration)
    }

    /// Stable sort, so equal priorities keep their arrival order.
    fn sort_queue(&mut self) {
        let locations = &self.locations;
        let mode = self.config.mode;
        let corner_estimate = 2 * self.grid.side() as u64;
        self.queue.make_contiguous().sort_by_key(|coord| {
            let distance = u64::from(locations.distance_to(*coord).unwrap_or(u32::MAX));
            match mode {
                SearchMode::Heuristic => {
                    distance + corner_estimate - (u64::from(coord.x) + u64::from(coord.y))
                }
                SearchMode::Exact => distance,
            }
        });
    }

    fn finish(self, outcome: SearchOutcome, iterations: usize) -> SearchResult {
        SearchResult {
            outcome,
            locations: self.locations,
            iterations,
            start: self.start,
            end: self.end,
        }
    }
}

//! **mazes** generates perfect mazes on a square grid and finds a way through them.
//!
//! `generators` carves mazes with the growing tree algorithm, `pathing` searches a grid of
//! passages and walls from the top left to the bottom right cell.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod pathing;
pub mod units;
pub mod utils;

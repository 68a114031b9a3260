use rand::Rng;

use crate::{ALL_DIRECTIONS, Grid};

/// Knocks down up to `attempts` random walls to add loops.
///
/// Each attempt picks a cell and a side uniformly; border sides and walls that
/// are already open are skipped. Regions are not touched. Returns the number
/// of walls actually opened.
pub fn braid(grid: &mut Grid, attempts: usize, rng: &mut impl Rng) -> usize {
    let mut opened = 0;
    for _ in 0..attempts {
        let row = rng.random_range(0..grid.height());
        let col = rng.random_range(0..grid.width());
        let dir = ALL_DIRECTIONS[rng.random_range(0..ALL_DIRECTIONS.len())];
        if grid.neighbour((row, col), dir).is_some() && grid.carve((row, col), dir) {
            opened += 1;
        }
    }
    opened
}

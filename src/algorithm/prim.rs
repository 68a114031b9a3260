use anyhow::Result;
use rand::Rng;

use super::{
    Carver,
    common::{ensure_unclaimed, unclaimed_walls},
};
use crate::{Grid, Wall};

/// Randomised Prim's algorithm.
///
/// Grows the maze from a frontier of walls leading out of it, opening a
/// uniformly chosen frontier wall whenever the cell behind it is still free.
pub struct Prim;

impl Carver for Prim {
    fn carve(
        grid: &mut Grid,
        start: (usize, usize),
        region: usize,
        rng: &mut impl Rng,
    ) -> Result<usize> {
        ensure_unclaimed(grid, start)?;
        grid.claim(start, region);
        let mut claimed = 1;
        let mut frontier: Vec<Wall> = unclaimed_walls(grid, start).collect();

        while !frontier.is_empty() {
            let wall = frontier.swap_remove(rng.random_range(0..frontier.len()));
            // Reached through another frontier wall already
            if grid[wall.to].is_visited() {
                continue;
            }
            let _ = wall.carve(grid);
            grid.claim(wall.to, region);
            claimed += 1;
            frontier.extend(unclaimed_walls(grid, wall.to));
        }

        Ok(claimed)
    }
}

use anyhow::{Result, ensure};

use crate::{ALL_DIRECTIONS, Grid, Wall};

// Walls from `pos` to in-bounds neighbours nobody has claimed yet
pub fn unclaimed_walls(grid: &Grid, pos: (usize, usize)) -> impl Iterator<Item = Wall> + '_ {
    ALL_DIRECTIONS
        .into_iter()
        .filter_map(move |dir| Wall::between(grid, pos, dir))
        .filter(move |wall| !grid[wall.to].is_visited())
}

pub fn ensure_unclaimed(grid: &Grid, start: (usize, usize)) -> Result<()> {
    ensure!(
        !grid[start].is_visited(),
        "Cannot carve from ({}, {}): cell is already claimed",
        start.0,
        start.1
    );
    Ok(())
}

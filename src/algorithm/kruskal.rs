use anyhow::Result;
use rand::{Rng, seq::SliceRandom};

use super::{Carver, common::ensure_unclaimed};
use crate::{ALL_DIRECTIONS, Direction, DisjointSet, Grid, Wall};

/// Randomised Kruskal's algorithm.
///
/// Collects the whole unclaimed component first, then opens its internal walls
/// in shuffled order whenever they join two separate trees.
pub struct Kruskal;

impl Carver for Kruskal {
    fn carve(
        grid: &mut Grid,
        start: (usize, usize),
        region: usize,
        rng: &mut impl Rng,
    ) -> Result<usize> {
        ensure_unclaimed(grid, start)?;
        let cells = flood_claim(grid, start, region);

        // Each internal edge once, from its upper or left cell
        let view: &Grid = grid;
        let mut walls: Vec<Wall> = cells
            .iter()
            .flat_map(|&pos| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter_map(move |dir| Wall::between(view, pos, dir))
            })
            .filter(|wall| wall.region_to == Some(region))
            .collect();
        walls.shuffle(rng);

        let mut trees = DisjointSet::new(cells.iter().copied());
        for wall in walls {
            if trees.set_count() <= 1 {
                break;
            }
            let a = trees.find_rep(&wall.from)?;
            let b = trees.find_rep(&wall.to)?;
            if a != b {
                trees.union_reps(&a, &b)?;
                let _ = wall.carve(grid);
            }
        }

        Ok(cells.len())
    }
}

// Claims every unclaimed cell reachable from `start` without opening any wall
fn flood_claim(grid: &mut Grid, start: (usize, usize), region: usize) -> Vec<(usize, usize)> {
    grid.claim(start, region);
    let mut cells = vec![start];
    let mut stack = vec![start];

    while let Some(pos) = stack.pop() {
        for dir in ALL_DIRECTIONS {
            let Some(next) = grid.neighbour(pos, dir) else {
                continue;
            };
            if !grid[next].is_visited() {
                grid.claim(next, region);
                cells.push(next);
                stack.push(next);
            }
        }
    }

    cells
}

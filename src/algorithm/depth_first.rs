use anyhow::Result;
use rand::{Rng, seq::SliceRandom};

use super::{Carver, common::ensure_unclaimed};
use crate::{ALL_DIRECTIONS, Direction, Grid};

// One level of the backtracking walk
struct Frame {
    pos: (usize, usize),
    order: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new(pos: (usize, usize), rng: &mut impl Rng) -> Self {
        let mut order = ALL_DIRECTIONS;
        order.shuffle(rng);
        Self {
            pos,
            order,
            next: 0,
        }
    }

    // Advances past directions until one leads to an unclaimed cell
    fn next_step(&mut self, grid: &Grid) -> Option<(Direction, (usize, usize))> {
        while let Some(&dir) = self.order.get(self.next) {
            self.next += 1;
            if let Some(next) = grid.neighbour(self.pos, dir)
                && !grid[next].is_visited()
            {
                return Some((dir, next));
            }
        }
        None
    }
}

/// Recursive backtracker.
///
/// Walks to a random unclaimed neighbour, opening the wall on the way, and
/// backs up when a cell has none left. The walk is kept on a heap-allocated
/// stack so large grids cannot overflow the call stack.
pub struct DepthFirst;

impl Carver for DepthFirst {
    fn carve(
        grid: &mut Grid,
        start: (usize, usize),
        region: usize,
        rng: &mut impl Rng,
    ) -> Result<usize> {
        ensure_unclaimed(grid, start)?;
        grid.claim(start, region);
        let mut claimed = 1;
        let mut stack = vec![Frame::new(start, rng)];

        while let Some(frame) = stack.last_mut() {
            let from = frame.pos;
            match frame.next_step(grid) {
                Some((dir, next)) => {
                    let _ = grid.carve(from, dir);
                    grid.claim(next, region);
                    claimed += 1;
                    stack.push(Frame::new(next, rng));
                }
                None => {
                    let _ = stack.pop();
                }
            }
        }

        Ok(claimed)
    }
}

use rand::Rng;
use tracing::trace;

use crate::{Direction, Grid};

/// Upper bound on the Bernoulli trials summed for one room side.
const MAX_SIDE_TRIALS: usize = 9;

/// Rooms longer than this many times their breadth are rejected.
const MAX_ASPECT_RATIO: usize = 4;

/// An axis-aligned rectangle of cells carved as a single open room.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    /// Row of the top-left cell.
    pub row: usize,
    /// Column of the top-left cell.
    pub col: usize,
    /// Number of columns covered.
    pub width: usize,
    /// Number of rows covered.
    pub height: usize,
}

impl Room {
    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether `pos` lies inside the room.
    #[must_use]
    pub const fn contains(&self, pos: (usize, usize)) -> bool {
        pos.0 >= self.row
            && pos.0 < self.row + self.height
            && pos.1 >= self.col
            && pos.1 < self.col + self.width
    }

    /// Every covered position, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (col, width) = (self.col, self.width);
        (self.row..self.row + self.height)
            .flat_map(move |row| (col..col + width).map(move |col| (row, col)))
    }

    const fn is_skinny(&self) -> bool {
        self.width > MAX_ASPECT_RATIO * self.height || self.height > MAX_ASPECT_RATIO * self.width
    }
}

/// Binomial side length: `min(9, limit - 1)` fair trials plus one.
fn sample_side(limit: usize, rng: &mut impl Rng) -> usize {
    let trials = MAX_SIDE_TRIALS.min(limit - 1);
    (0..trials).filter(|_| rng.random_bool(0.5)).count() + 1
}

/// Tries `attempts` times to drop a room onto unclaimed cells.
///
/// Each accepted room becomes its own region, numbered upwards from
/// `first_region` in placement order. Its interior walls are opened and its
/// boundary left standing. Rejected attempts change nothing.
pub fn place_rooms(
    grid: &mut Grid,
    attempts: usize,
    first_region: usize,
    rng: &mut impl Rng,
) -> Vec<Room> {
    let mut rooms = Vec::new();

    for attempt in 0..attempts {
        let width = sample_side(grid.width(), rng);
        let height = sample_side(grid.height(), rng);
        let mut room = Room {
            row: 0,
            col: 0,
            width,
            height,
        };
        if room.is_skinny() {
            trace!(attempt, width, height, "Rejected skinny room");
            continue;
        }

        room.row = rng.random_range(0..=grid.height() - height);
        room.col = rng.random_range(0..=grid.width() - width);
        if room.cells().any(|pos| grid[pos].is_visited()) {
            trace!(attempt, ?room, "Rejected overlapping room");
            continue;
        }

        carve_room(grid, &room, first_region + rooms.len());
        rooms.push(room);
    }

    rooms
}

fn carve_room(grid: &mut Grid, room: &Room, region: usize) {
    for pos in room.cells() {
        grid.claim(pos, region);
        grid.mark_room(pos);
        if pos.1 + 1 < room.col + room.width {
            let _ = grid.carve(pos, Direction::Right);
        }
        if pos.0 + 1 < room.row + room.height {
            let _ = grid.carve(pos, Direction::Down);
        }
    }
}

use std::fmt::{Display, Formatter};

use crate::Direction;

const FLOOR_ROOM: &str = " . ";
const FLOOR_CORRIDOR: &str = "   ";
const FLOOR_UNCLAIMED: &str = " ? ";

/// A single grid tile: four walls plus the bookkeeping written by generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    walls: [bool; 4],
    visited: bool,
    region: Option<usize>,
    room: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            walls: [true; 4],
            visited: false,
            region: None,
            room: false,
        }
    }
}

impl Cell {
    /// Whether the wall on the `dir` side is standing.
    #[must_use]
    pub const fn wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    /// All four walls, indexed by [`Direction::index`].
    #[must_use]
    pub const fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Claimed by room placement or a carving pass.
    #[must_use]
    pub const fn is_visited(&self) -> bool {
        self.visited
    }

    /// Connected component id, `None` until the cell is claimed.
    #[must_use]
    pub const fn region(&self) -> Option<usize> {
        self.region
    }

    /// Part of a placed room rather than a corridor.
    #[must_use]
    pub const fn is_room(&self) -> bool {
        self.room
    }

    /// Number of sides without a wall.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }

    pub(crate) fn set_wall(&mut self, dir: Direction, present: bool) {
        self.walls[dir.index()] = present;
    }

    pub(crate) fn claim(&mut self, region: usize) {
        self.visited = true;
        self.region = Some(region);
    }

    pub(crate) fn mark_room(&mut self) {
        self.room = true;
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.room {
            write!(f, "{FLOOR_ROOM}")
        } else if self.visited {
            write!(f, "{FLOOR_CORRIDOR}")
        } else {
            write!(f, "{FLOOR_UNCLAIMED}")
        }
    }
}

use std::fmt::{Display, Formatter};

use crate::Grid;

/// Summary of a generated layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutStats {
    /// Columns in the grid.
    pub width: usize,
    /// Rows in the grid.
    pub height: usize,
    /// Rooms placed.
    pub rooms: usize,
    /// Cells inside rooms.
    pub room_cells: usize,
    /// Regions before joining, rooms included.
    pub regions: usize,
    /// Open internal walls, each counted once.
    pub open_walls: usize,
    /// Cells with exactly one way out.
    pub dead_ends: usize,
    /// Every cell reachable from every other.
    pub connected: bool,
}

impl LayoutStats {
    /// Measures `grid`.
    #[must_use]
    pub fn of(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            rooms: grid.room_count(),
            room_cells: grid.cells().iter().filter(|cell| cell.is_room()).count(),
            regions: grid.region_count(),
            open_walls: grid.open_wall_count(),
            dead_ends: grid
                .cells()
                .iter()
                .filter(|cell| cell.open_count() == 1)
                .count(),
            connected: grid.is_connected(),
        }
    }

    /// Open walls beyond those of a spanning tree, i.e. independent loops.
    #[must_use]
    pub fn loops(&self) -> usize {
        (self.open_walls + 1).saturating_sub(self.width * self.height)
    }
}

impl Display for LayoutStats {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        writeln!(f, "Size              : {}x{}", self.width, self.height)?;
        writeln!(
            f,
            "Rooms             : {} ({} cells)",
            self.rooms, self.room_cells
        )?;
        writeln!(f, "Regions joined    : {}", self.regions)?;
        writeln!(f, "Open walls        : {}", self.open_walls)?;
        writeln!(f, "Loops             : {}", self.loops())?;
        writeln!(f, "Dead ends         : {}", self.dead_ends)?;
        write!(f, "Connected         : {}", self.connected)
    }
}

use crate::{Direction, Grid};

/// A candidate edge between two adjacent cells.
///
/// Walls are transient: carving passes collect them, shuffle or sample them,
/// and open some through [`Grid::carve`]. They are never stored in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wall {
    /// Cell on the near side.
    pub from: (usize, usize),
    /// Cell on the far side.
    pub to: (usize, usize),
    /// Side of `from` facing `to`.
    pub dir_from: Direction,
    /// Side of `to` facing `from`.
    pub dir_to: Direction,
    /// Region of `from` when the wall was recorded.
    pub region_from: Option<usize>,
    /// Region of `to` when the wall was recorded.
    pub region_to: Option<usize>,
}

impl Wall {
    /// The wall on the `dir` side of `from`, or `None` on the grid border.
    #[must_use]
    pub fn between(grid: &Grid, from: (usize, usize), dir: Direction) -> Option<Self> {
        let to = grid.neighbour(from, dir)?;
        Some(Self {
            from,
            to,
            dir_from: dir,
            dir_to: dir.opposite(),
            region_from: grid[from].region(),
            region_to: grid[to].region(),
        })
    }

    /// Whether the wall separates two different regions.
    #[must_use]
    pub fn is_connector(&self) -> bool {
        self.region_from != self.region_to
    }

    /// Opens this wall in `grid`, returning whether it was standing.
    pub fn carve(&self, grid: &mut Grid) -> bool {
        debug_assert_eq!(grid.neighbour(self.from, self.dir_from), Some(self.to));
        grid.carve(self.from, self.dir_from)
    }
}

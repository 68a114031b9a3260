use anyhow::{Result, ensure};
use fixedbitset::FixedBitSet;
use ndarray::Array2;
use rand::Rng;
use std::{
    collections::VecDeque,
    fmt::{Display, Formatter},
    ops::Index,
};
use tracing::{debug, info};

use crate::{
    ALL_DIRECTIONS, Cell, Direction, GenerationConfig, Room, algorithm::GenerationProgress,
    braiding::braid, joining::join_regions, rooms::place_rooms,
};

/// A `height × width` matrix of cells and the layout generated into it.
///
/// Positions are `(row, column)` pairs. Walls are stored on both sides of every
/// shared edge and are only ever changed through [`Grid::carve`], which keeps
/// the two sides in agreement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    regions: usize,
    rooms: Vec<Room>,
}

impl Grid {
    /// Creates a fully walled, unclaimed grid.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        ensure!(width > 0, "Grid width must be greater than zero");
        ensure!(height > 0, "Grid height must be greater than zero");
        Ok(Self {
            cells: Array2::from_elem((height, width), Cell::default()),
            regions: 0,
            rooms: Vec::new(),
        })
    }

    /// Builds a grid sized by `config` and generates a layout into it.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid.
    pub fn generate(config: &GenerationConfig, rng: &mut impl Rng) -> Result<Self> {
        let mut grid = Self::new(config.width, config.height)?;
        grid.init(config, rng)?;
        Ok(grid)
    }

    /// Discards any previous layout and generates a new one.
    ///
    /// Rooms are placed first, then every cell still unclaimed in row-major
    /// order seeds a maze carved by the configured algorithm. The resulting
    /// regions are joined into one connected layout and finally braided.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid. The grid is left untouched in that case.
    pub fn init(&mut self, config: &GenerationConfig, rng: &mut impl Rng) -> Result<()> {
        config.validate()?;
        info!(
            width = config.width,
            height = config.height,
            algorithm = %config.algorithm,
            room_attempts = config.room_attempts,
            wall_removal_attempts = config.wall_removal_attempts,
            "Generating layout"
        );
        self.reset(config.width, config.height);

        let progress = GenerationProgress::new(self.len(), config.show_progress)?;

        progress.stage("rooms");
        let rooms = place_rooms(self, config.room_attempts, 0, rng);
        progress.advance(rooms.iter().map(Room::area).sum());
        debug!(placed = rooms.len(), "Placed rooms");

        progress.stage("carving");
        let mut next_region = rooms.len();
        for row in 0..self.height() {
            for col in 0..self.width() {
                if self[(row, col)].is_visited() {
                    continue;
                }
                let claimed = config.algorithm.carve(self, (row, col), next_region, rng)?;
                progress.advance(claimed);
                next_region += 1;
            }
        }
        debug!(regions = next_region - rooms.len(), "Carved mazes");
        self.regions = next_region;
        self.rooms = rooms;

        progress.stage("joining");
        let joined = join_regions(self, next_region, rng)?;
        debug!(connectors = joined, "Joined regions");

        progress.stage("braiding");
        let opened = braid(self, config.wall_removal_attempts, rng);
        debug!(opened, "Braided layout");

        progress.finish();
        Ok(())
    }

    fn reset(&mut self, width: usize, height: usize) {
        if self.cells.dim() == (height, width) {
            self.cells.fill(Cell::default());
        } else {
            self.cells = Array2::from_elem((height, width), Cell::default());
        }
        self.regions = 0;
        self.rooms.clear();
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The underlying cell matrix, indexed by `(row, column)`.
    #[must_use]
    pub fn cells(&self) -> &Array2<Cell> {
        &self.cells
    }

    /// Cell at `pos`, or `None` when out of bounds.
    #[must_use]
    pub fn get(&self, pos: (usize, usize)) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let width = self.width();
        (0..self.height()).flat_map(move |row| (0..width).map(move |col| (row, col)))
    }

    /// Number of regions produced by the last generation, rooms included.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions
    }

    /// Rooms placed by the last generation, in placement order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms placed by the last generation.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Position one step from `pos` towards `dir`, if inside the grid.
    #[must_use]
    pub fn neighbour(&self, pos: (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = dir.delta();
        let (row, col) = pos;
        let row = row.checked_add_signed(dr).filter(|&r| r < self.height())?;
        let col = col.checked_add_signed(dc).filter(|&c| c < self.width())?;
        Some((row, col))
    }

    /// Opens the wall between `pos` and its neighbour towards `dir`.
    ///
    /// Returns whether the wall was standing. Clearing an open wall is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the neighbour lies outside the grid; border walls are never
    /// carved.
    pub fn carve(&mut self, pos: (usize, usize), dir: Direction) -> bool {
        let Some(next) = self.neighbour(pos, dir) else {
            panic!("Cannot carve {dir:?} from {pos:?}: neighbour is outside the grid");
        };
        let was_closed = self.cells[pos].wall(dir);
        self.cells[pos].set_wall(dir, false);
        self.cells[next].set_wall(dir.opposite(), false);
        was_closed
    }

    pub(crate) fn claim(&mut self, pos: (usize, usize), region: usize) {
        self.cells[pos].claim(region);
    }

    pub(crate) fn mark_room(&mut self, pos: (usize, usize)) {
        self.cells[pos].mark_room();
    }

    /// Whether every cell is reachable from every other through open walls.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let width = self.width();
        let mut reached = FixedBitSet::with_capacity(self.len());
        let mut queue = VecDeque::from([(0_usize, 0_usize)]);
        reached.insert(0);
        let mut count = 1;

        while let Some(pos) = queue.pop_front() {
            for dir in ALL_DIRECTIONS {
                if self[pos].wall(dir) {
                    continue;
                }
                let Some(next) = self.neighbour(pos, dir) else {
                    continue;
                };
                let index = next.0 * width + next.1;
                if !reached.put(index) {
                    count += 1;
                    queue.push_back(next);
                }
            }
        }

        count == self.len()
    }

    /// Number of internal walls that are open, each shared edge counted once.
    #[must_use]
    pub fn open_wall_count(&self) -> usize {
        self.positions()
            .flat_map(|pos| {
                [Direction::Down, Direction::Right]
                    .into_iter()
                    .filter(move |&dir| self.neighbour(pos, dir).is_some() && !self[pos].wall(dir))
            })
            .count()
    }

    /// Whether every shared edge agrees on both sides.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.positions().all(|pos| {
            ALL_DIRECTIONS.into_iter().all(|dir| {
                self.neighbour(pos, dir)
                    .is_none_or(|next| self[pos].wall(dir) == self[next].wall(dir.opposite()))
            })
        })
    }

    /// Whether every wall on the outer boundary is standing.
    #[must_use]
    pub fn is_border_intact(&self) -> bool {
        self.positions().all(|pos| {
            ALL_DIRECTIONS
                .into_iter()
                .all(|dir| self.neighbour(pos, dir).is_some() || self[pos].wall(dir))
        })
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, pos: (usize, usize)) -> &Cell {
        &self.cells[pos]
    }
}

const fn horizontal(wall: bool) -> &'static str {
    if wall { "---" } else { "   " }
}

const fn vertical(wall: bool) -> &'static str {
    if wall { "|" } else { " " }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "+{}", horizontal(cell.wall(Direction::Up)))?;
            }
            writeln!(f, "+")?;

            for cell in row {
                write!(f, "{}{cell}", vertical(cell.wall(Direction::Left)))?;
            }
            let last = &row[row.len() - 1];
            writeln!(f, "{}", vertical(last.wall(Direction::Right)))?;
        }

        for cell in self.cells.row(self.height() - 1) {
            write!(f, "+{}", horizontal(cell.wall(Direction::Down)))?;
        }
        writeln!(f, "+")
    }
}

//! # `BraidedMaze`
//!
//! `BraidedMaze` is a library for procedurally generating room-and-corridor
//! layouts on a rectangular grid.
//!
//! A layout is built in four passes over a [`Grid`]: rooms are dropped onto
//! free space, every remaining component is carved into a perfect maze by the
//! chosen [`Algorithm`], the resulting regions are joined into one connected
//! layout, and finally random walls are knocked down to add loops.
//!
//! ```
//! use braided_maze::{Algorithm, GenerationConfig, Grid};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let config = GenerationConfig::new(20, 12, Algorithm::Kruskal)
//!     .with_rooms(30)
//!     .with_wall_removals(10);
//! let grid = Grid::generate(&config, &mut StdRng::seed_from_u64(7))?;
//! assert!(grid.is_connected());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod algorithm;
mod braiding;
mod cell;
mod config;
mod direction;
mod disjoint_set;
mod grid;
mod joining;
mod rooms;
mod stats;
mod wall;

pub use algorithm::{Algorithm, Carver, DepthFirst, Kruskal, Prim};
pub use braiding::braid;
pub use cell::Cell;
pub use config::GenerationConfig;
pub use direction::{ALL_DIRECTIONS, Direction};
pub use disjoint_set::DisjointSet;
pub use grid::Grid;
pub use joining::{connectors, join_regions};
pub use rooms::{Room, place_rooms};
pub use stats::LayoutStats;
pub use wall::Wall;

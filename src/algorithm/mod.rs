mod common;
mod depth_first;
mod kruskal;
mod prim;
mod progress;

pub use depth_first::DepthFirst;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub(crate) use progress::GenerationProgress;

use anyhow::{Error, Result, bail};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::Grid;

/// A maze-carving strategy.
pub trait Carver {
    /// Carves a spanning tree over the unclaimed component containing `start`.
    ///
    /// Every cell of the component is claimed for `region`, and exactly one
    /// wall is opened per cell beyond the first. Returns the number of cells
    /// claimed.
    ///
    /// # Errors
    ///
    /// Fails if `start` is already claimed.
    fn carve(
        grid: &mut Grid,
        start: (usize, usize),
        region: usize,
        rng: &mut impl Rng,
    ) -> Result<usize>;
}

/// Which [`Carver`] fills the unclaimed components of a generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Randomised depth-first search with an explicit backtracking stack.
    #[default]
    #[serde(rename = "dfs", alias = "depth-first")]
    DepthFirst,
    /// Randomised Prim's algorithm over a wall frontier.
    Prim,
    /// Randomised Kruskal's algorithm over the component's walls.
    Kruskal,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Self; 3] = [Self::DepthFirst, Self::Prim, Self::Kruskal];

    /// Runs the selected carver. See [`Carver::carve`].
    ///
    /// # Errors
    ///
    /// Fails if `start` is already claimed.
    pub fn carve(
        self,
        grid: &mut Grid,
        start: (usize, usize),
        region: usize,
        rng: &mut impl Rng,
    ) -> Result<usize> {
        match self {
            Self::DepthFirst => DepthFirst::carve(grid, start, region, rng),
            Self::Prim => Prim::carve(grid, start, region, rng),
            Self::Kruskal => Kruskal::carve(grid, start, region, rng),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::DepthFirst => write!(f, "dfs"),
            Self::Prim => write!(f, "prim"),
            Self::Kruskal => write!(f, "kruskal"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            "prim" => Ok(Self::Prim),
            "kruskal" => Ok(Self::Kruskal),
            other => bail!("Unknown algorithm '{other}', expected dfs, prim or kruskal"),
        }
    }
}

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Algorithm;

/// Parameters of one layout request.
///
/// Missing fields take their [`Default`] values when deserialised, so a YAML
/// file only needs the settings it changes:
///
/// ```yaml
/// width: 40
/// height: 25
/// algorithm: kruskal
/// room_attempts: 60
/// wall_removal_attempts: 30
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Columns in the grid.
    pub width: usize,
    /// Rows in the grid.
    pub height: usize,
    /// Carver used for every unclaimed component.
    pub algorithm: Algorithm,
    /// Number of room placement tries.
    pub room_attempts: usize,
    /// Number of random wall removals after joining.
    #[serde(alias = "wall_rm_attempts")]
    pub wall_removal_attempts: usize,
    /// Draw a progress bar on stderr while generating.
    pub show_progress: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            algorithm: Algorithm::default(),
            room_attempts: 0,
            wall_removal_attempts: 0,
            show_progress: false,
        }
    }
}

impl GenerationConfig {
    /// A plain maze request: no rooms, no braiding.
    #[must_use]
    pub fn new(width: usize, height: usize, algorithm: Algorithm) -> Self {
        Self {
            width,
            height,
            algorithm,
            ..Self::default()
        }
    }

    /// Sets the number of room placement tries.
    #[must_use]
    pub fn with_rooms(mut self, attempts: usize) -> Self {
        self.room_attempts = attempts;
        self
    }

    /// Sets the number of braiding tries.
    #[must_use]
    pub fn with_wall_removals(mut self, attempts: usize) -> Self {
        self.wall_removal_attempts = attempts;
        self
    }

    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML, unknown fields or an invalid config.
    pub fn from_yaml(data: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(data).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not hold a valid config.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&data).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Checks the grid dimensions are usable.
    ///
    /// # Errors
    ///
    /// Fails if either dimension is zero.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.width > 0, "Grid width must be greater than zero");
        ensure!(self.height > 0, "Grid height must be greater than zero");
        Ok(())
    }
}

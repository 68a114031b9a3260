use anyhow::Result;
use braided_maze::{Algorithm, GenerationConfig, Grid, LayoutStats};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use tracing::Level;

/// Room-and-corridor layout generation.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Config {
    /// YAML file with generation settings; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short = 'W', long)]
    width: Option<usize>,

    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// One of dfs, prim or kruskal.
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    #[arg(short, long)]
    rooms: Option<usize>,

    #[arg(short = 'b', long)]
    wall_removals: Option<usize>,

    #[arg(short, long)]
    seed: Option<u64>,

    #[clap(short, long)]
    progress: bool,

    #[clap(short, long)]
    verbose: bool,
}

impl Config {
    fn generation_config(&self) -> Result<GenerationConfig> {
        let mut generation = match &self.config {
            Some(path) => GenerationConfig::load(path)?,
            None => GenerationConfig::default(),
        };
        if let Some(width) = self.width {
            generation.width = width;
        }
        if let Some(height) = self.height {
            generation.height = height;
        }
        if let Some(algorithm) = self.algorithm {
            generation.algorithm = algorithm;
        }
        if let Some(rooms) = self.rooms {
            generation.room_attempts = rooms;
        }
        if let Some(removals) = self.wall_removals {
            generation.wall_removal_attempts = removals;
        }
        generation.show_progress |= self.progress;
        Ok(generation)
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    tracing_subscriber::fmt()
        .with_max_level(if config.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    let generation = config.generation_config()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    if config.verbose {
        let (width, height) = (generation.width, generation.height);
        println!("Size              : {width}x{height}");
        println!("Algorithm         : {}", generation.algorithm);
        println!("Room attempts     : {}", generation.room_attempts);
        println!("Wall removals     : {}", generation.wall_removal_attempts);
        println!("Seed              : {seed}");
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let grid = Grid::generate(&generation, &mut rng)?;

    print!("{grid}");
    println!("{}", LayoutStats::of(&grid));
    Ok(())
}

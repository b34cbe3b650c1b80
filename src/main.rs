use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use rand::prelude::*;

mod generators;
mod grids;
mod renderer;

use generators::backtracker::Backtracker;
use generators::kruskal::Kruskal;
use generators::{Generator, GeneratorKind};
use grids::wall_grid::WallGrid;

/// Carves a perfect maze and prints it as text art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid height in cells
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Grid width in cells
    #[arg(long, default_value_t = 20)]
    cols: usize,

    /// Seed for the carver's rng; drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Carving algorithm
    #[arg(long, value_enum, default_value = "kruskal")]
    generator: GeneratorKind,
}

fn new_generator(kind: GeneratorKind, seed: u64) -> Box<dyn Generator> {
    match kind {
        GeneratorKind::Backtracker => Box::new(Backtracker::new(seed)),
        GeneratorKind::Kruskal => Box::new(Kruskal::new(seed)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        "carving a {}x{} maze with {:?}, seed {}",
        args.rows, args.cols, args.generator, seed
    );

    let mut grid = WallGrid::with_dims(args.rows, args.cols)?;
    let mut generator = new_generator(args.generator, seed);

    let carve_start = std::time::Instant::now();
    generator.generate_maze(&mut grid);
    debug!("carved in {:?}", carve_start.elapsed());

    print!("{}", renderer::render(&grid));
    Ok(())
}

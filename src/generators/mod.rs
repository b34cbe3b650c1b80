pub mod backtracker;
pub mod disjoint_set;
pub mod kruskal;

use crate::grids::wall_grid::WallGrid;

pub trait Generator {
    /// Carves a perfect maze over every cell of `grid`: all cells end up
    /// connected by exactly one path, with no cycles.
    fn generate_maze(&mut self, grid: &mut WallGrid);
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum GeneratorKind {
    Backtracker,
    Kruskal,
}

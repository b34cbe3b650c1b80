use rand::prelude::*;

use crate::generators::disjoint_set::DisjointSet;
use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::Direction;

/// Randomized spanning-tree carver. Visits every interior wall in uniformly
/// random order and knocks it down exactly when the two cells it separates
/// are not yet connected, so passage placement carries no depth bias.
pub struct Kruskal {
    rng: StdRng,
}

impl Kruskal {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Generator for Kruskal {
    fn generate_maze(&mut self, grid: &mut WallGrid) {
        // Scanning East and South from each cell lists every undirected
        // adjacency exactly once.
        let mut edges = Vec::new();
        for row in 0..grid.dims.rows {
            for col in 0..grid.dims.columns {
                for &direction in &[Direction::East, Direction::South] {
                    if let Some(neighbor) = grid.neighbor_of((row, col), direction) {
                        edges.push(((row, col), neighbor, direction));
                    }
                }
            }
        }
        edges.shuffle(&mut self.rng);

        let mut sets = DisjointSet::new(grid.dims.rows * grid.dims.columns);
        for ((row, col), neighbor, direction) in edges {
            let set_a = sets.find(grid.index_of(row, col));
            let set_b = sets.find(grid.index_of(neighbor.0, neighbor.1));

            if set_a != set_b {
                sets.union(set_a, set_b);
                grid.carve_passage((row, col), direction);
            }
            // same root: the cells are already connected and carving the
            // wall would close a cycle
        }
    }
}

use rand::prelude::*;

use crate::generators::Generator;
use crate::grids::wall_grid::WallGrid;
use crate::grids::{Direction, DIRECTIONS};

/// One cell of the depth-first walk: where we are and which of its shuffled
/// directions are still untried.
struct Frame {
    coords: (usize, usize),
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng>(coords: (usize, usize), rng: &mut R) -> Self {
        let mut directions = DIRECTIONS;
        directions.shuffle(rng);
        Self {
            coords,
            directions,
            next: 0,
        }
    }
}

/// Depth-first carver. Walks from the top-left corner, carving into a
/// random untouched neighbor until boxed in, then backs up to the most
/// recent cell that still has untried directions.
pub struct Backtracker {
    rng: StdRng,
}

impl Backtracker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Generator for Backtracker {
    fn generate_maze(&mut self, grid: &mut WallGrid) {
        // the walk can run rows*columns frames deep, so its state lives on
        // an explicit stack instead of the call stack
        let mut stack = Vec::new();
        stack.push(Frame::new((0, 0), &mut self.rng));

        while let Some(mut frame) = stack.pop() {
            while frame.next < frame.directions.len() {
                let direction = frame.directions[frame.next];
                frame.next += 1;

                let neighbor = match grid.neighbor_of(frame.coords, direction) {
                    Some(coords) => coords,
                    None => continue,
                };
                if grid.get_cell(neighbor.0, neighbor.1) != 0 {
                    // already part of the maze
                    continue;
                }

                grid.carve_passage(frame.coords, direction);
                stack.push(frame);
                frame = Frame::new(neighbor, &mut self.rng);
            }
        }
    }
}

use anyhow::{anyhow, Result};

use crate::grids::{Dimensions, Direction};

/// Grid of per-cell edge masks. A set bit means the wall toward that
/// neighbor has been carved away; a mask of 0 means the cell is untouched.
#[derive(Debug, PartialEq)]
pub struct WallGrid {
    pub dims: Dimensions,

    cells: Vec<u8>,
}

impl WallGrid {
    /// All-walls grid. Carving a maze needs at least one cell, so zero rows
    /// or columns are refused.
    pub fn with_dims(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(anyhow!(
                "grid dimensions must be nonzero, got {}x{}",
                rows,
                columns
            ));
        }

        Ok(Self {
            cells: vec![0; rows * columns],
            dims: Dimensions { rows, columns },
        })
    }

    #[inline]
    pub fn index_of(&self, row: usize, column: usize) -> usize {
        (self.dims.columns * row) + column
    }

    #[inline]
    pub fn get_cell(&self, row: usize, column: usize) -> u8 {
        self.cells[self.index_of(row, column)]
    }

    /// True if the wall toward `direction` has been carved away.
    #[inline]
    pub fn has_passage(&self, row: usize, column: usize, direction: Direction) -> bool {
        self.get_cell(row, column) & direction.bit() != 0
    }

    /// Coordinates of the cell one step in `direction`, or `None` past the
    /// grid edge.
    pub fn neighbor_of(
        &self,
        coords: (usize, usize),
        direction: Direction,
    ) -> Option<(usize, usize)> {
        let (d_row, d_col) = direction.offset();
        let row = coords.0 as isize + d_row;
        let column = coords.1 as isize + d_col;

        if row < 0
            || column < 0
            || row >= self.dims.rows as isize
            || column >= self.dims.columns as isize
        {
            None
        } else {
            Some((row as usize, column as usize))
        }
    }

    /// Removes the wall between `coords` and its neighbor in `direction`,
    /// returning the neighbor's coordinates. The passage is recorded on both
    /// cells at once, so the grid never holds a one-sided opening.
    pub fn carve_passage(&mut self, coords: (usize, usize), direction: Direction) -> (usize, usize) {
        let neighbor = self
            .neighbor_of(coords, direction)
            .expect("carve_passage requires an in-bounds neighbor");

        let index = self.index_of(coords.0, coords.1);
        self.cells[index] |= direction.bit();
        let index = self.index_of(neighbor.0, neighbor.1);
        self.cells[index] |= (-direction).bit();

        neighbor
    }
}

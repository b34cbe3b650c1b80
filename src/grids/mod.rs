pub mod wall_grid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

/// Edge flags for a cell. The discriminant is the bit the direction occupies
/// in a cell's mask, so a mask can hold any subset of the four.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(u8)]
pub enum Direction {
    North = 1,
    East = 2,
    South = 4,
    West = 8,
}

pub const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    #[inline]
    pub fn bit(self) -> u8 {
        self as u8
    }

    /// Value to add to the current (row, column) to go in this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl std::ops::Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Self::Output {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

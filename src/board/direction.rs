//! The eight compass directions used by the flanking scan.
//!
//! Each direction is a unit offset applied repeatedly while walking outward
//! from a placement square. The table is compile-time `const` data and is
//! never mutated.

/// A unit offset along one of the eight compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

pub const NORTH_WEST: Direction = Direction { dx: -1, dy: -1 };
pub const NORTH: Direction = Direction { dx: 0, dy: -1 };
pub const NORTH_EAST: Direction = Direction { dx: 1, dy: -1 };
pub const WEST: Direction = Direction { dx: -1, dy: 0 };
pub const EAST: Direction = Direction { dx: 1, dy: 0 };
pub const SOUTH_WEST: Direction = Direction { dx: -1, dy: 1 };
pub const SOUTH: Direction = Direction { dx: 0, dy: 1 };
pub const SOUTH_EAST: Direction = Direction { dx: 1, dy: 1 };

/// All eight scan directions.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    NORTH_WEST, NORTH, NORTH_EAST, WEST, EAST, SOUTH_WEST, SOUTH, SOUTH_EAST,
];

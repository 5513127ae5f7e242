//! Core type definitions for the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of creature occupying a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Fish,
    Shark,
}

impl Species {
    /// Single-character symbol used by the console renderer
    pub fn symbol(&self) -> char {
        match self {
            Species::Fish => 'F',
            Species::Shark => 'S',
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Fish => write!(f, "fish"),
            Species::Shark => write!(f, "shark"),
        }
    }
}

/// 2D position in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Step one cell in `direction`, wrapping around the edges of a `size`x`size` torus.
    ///
    /// `self` must already lie inside the grid.
    pub fn step(&self, direction: Direction, size: usize) -> Self {
        match direction {
            Direction::West => Self::new((self.x + size - 1) % size, self.y),
            Direction::East => Self::new((self.x + 1) % size, self.y),
            Direction::North => Self::new(self.x, (self.y + size - 1) % size),
            Direction::South => Self::new(self.x, (self.y + 1) % size),
        }
    }

    /// The four orthogonal neighbors on a `size`x`size` torus, in [`Direction::ALL`] order.
    ///
    /// On grids smaller than 3 the same cell can show up more than once (and on a
    /// 1x1 grid every neighbor is the cell itself). Duplicates are kept so that
    /// candidate lists built from this stay in a fixed order.
    pub fn neighbors(&self, size: usize) -> [Position; 4] {
        Direction::ALL.map(|direction| self.step(direction, size))
    }

    /// Row-major storage index
    pub fn index(&self, size: usize) -> usize {
        self.y * size + self.x
    }

    /// Inverse of [`Position::index`]
    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new(index % size, index / size)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Free-function form of [`Position::neighbors`].
pub fn neighbors(x: usize, y: usize, size: usize) -> [Position; 4] {
    Position::new(x, y).neighbors(size)
}

/// Direction for movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    West,
    East,
    North,
    South,
}

impl Direction {
    /// Fixed order in which neighbors are enumerated
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];
}

//! 2D grid for the world.

use crate::creature::Creature;
use wator_core::{Error, Position, Result};

/// A square toroidal grid holding at most one creature per cell.
///
/// The grid itself never wraps coordinates; callers resolve neighbors with
/// [`Position::neighbors`] before addressing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Creature>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Width (and height) of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Occupant of `pos`, if any. Positions outside the grid hold nothing.
    pub fn get(&self, pos: Position) -> Option<&Creature> {
        if !self.contains(pos) {
            return None;
        }
        self.cells[self.pos_to_index(pos)].as_ref()
    }

    pub fn is_vacant(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Put `creature` on an empty cell.
    ///
    /// Writing over an occupant is refused rather than silently replacing it.
    pub fn place(&mut self, pos: Position, creature: Creature) -> Result<()> {
        if !self.contains(pos) {
            return Err(Error::OutOfBounds {
                pos,
                size: self.size,
            });
        }

        let index = self.pos_to_index(pos);
        match self.cells[index] {
            Some(_) => Err(Error::CellOccupied { pos }),
            None => {
                self.cells[index] = Some(creature);
                Ok(())
            }
        }
    }

    fn pos_to_index(&self, pos: Position) -> usize {
        pos.index(self.size)
    }

    /// Get position from index
    pub fn index_to_pos(&self, index: usize) -> Position {
        Position::from_index(index, self.size)
    }

    /// Iterator over all positions in scan order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(move |i| self.index_to_pos(i))
    }

    /// Iterator over occupied cells in scan order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Creature)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|c| (self.index_to_pos(i), c)))
    }

    pub fn vacant_positions(&self) -> Vec<Position> {
        self.positions().filter(|pos| self.is_vacant(*pos)).collect()
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

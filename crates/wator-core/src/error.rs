//! Error types for the simulation.

use crate::Position;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A creature was about to be written over another one. Always an engine bug.
    #[error("Cell {pos} is already occupied")]
    CellOccupied { pos: Position },

    #[error("Position {pos} is outside a {size}x{size} grid")]
    OutOfBounds { pos: Position, size: usize },

    #[error("Cannot place {requested} creatures on {available} free cells")]
    Overpopulated { requested: usize, available: usize },

    #[error("Validation error: {0}")]
    Validation(String),
}

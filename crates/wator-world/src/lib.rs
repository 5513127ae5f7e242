//! Wa-Tor world simulation.
//!
//! This module implements the toroidal ocean where fish and sharks move, breed,
//! hunt and starve, one chronon at a time.

pub mod chronon;
pub mod creature;
pub mod grid;
pub mod world;

pub use chronon::{process_chronon, ChrononEvents};
pub use creature::Creature;
pub use grid::Grid;
pub use world::{count_population, World};

use rand::SeedableRng;

/// Deterministic generator threaded through initialization and every chronon
pub type SimRng = rand_chacha::ChaCha8Rng;

pub fn seeded_rng(seed: u64) -> SimRng {
    SimRng::seed_from_u64(seed)
}

//! Core types and utilities for the Wa-Tor predator-prey simulation.

pub mod types;
pub mod config;
pub mod error;
pub mod census;

pub use error::{Error, Result};
pub use types::*;
pub use config::*;
pub use census::Census;

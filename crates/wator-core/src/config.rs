//! Configuration types for the simulation.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Breeding and starvation thresholds, fixed for the lifetime of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Chronons a fish must survive before it can reproduce
    pub fish_breed: u32,
    /// Chronons a shark must survive before it can reproduce
    pub shark_breed: u32,
    /// Energy a shark starts with and is restored to after every meal
    pub starve: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            fish_breed: 3,
            shark_breed: 10,
            starve: 5,
        }
    }
}

/// The six numeric simulation parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Width and height of the square grid
    pub grid_size: usize,
    pub initial_sharks: usize,
    pub initial_fish: usize,
    pub rules: Rules,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            initial_sharks: 100,
            initial_fish: 300,
            rules: Rules::default(),
        }
    }
}

impl SimulationConfig {
    /// Number of cells, or `None` if `grid_size` squared overflows
    pub fn capacity(&self) -> Option<usize> {
        self.grid_size.checked_mul(self.grid_size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::Validation("grid_size must be at least 1".to_string()));
        }

        let available = self.capacity().ok_or_else(|| {
            Error::Validation(format!("grid_size {} is too large", self.grid_size))
        })?;

        // Saturates rather than wraps, so an absurd request still fails the check
        let requested = self.initial_sharks.saturating_add(self.initial_fish);
        if requested > available {
            return Err(Error::Overpopulated {
                requested,
                available,
            });
        }

        Ok(())
    }
}

/// Controls for the console driver; none of these affect the rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Upper bound on chronons before the driver stops on its own
    pub max_chronons: u64,
    /// Pause between chronons (milliseconds)
    pub delay_ms: u64,
    /// Random seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_chronons: 10_000,
            delay_ms: 100,
            seed: None,
        }
    }
}

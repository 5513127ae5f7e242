//! Population counts.

use crate::Species;
use serde::{Deserialize, Serialize};

/// Number of living creatures of each species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub fish: usize,
    pub sharks: usize,
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally an iterator of species tags
    pub fn tally<I>(species: I) -> Self
    where
        I: IntoIterator<Item = Species>,
    {
        let mut census = Self::new();
        for s in species {
            census.record(s);
        }
        census
    }

    pub fn record(&mut self, species: Species) {
        match species {
            Species::Fish => self.fish += 1,
            Species::Shark => self.sharks += 1,
        }
    }

    pub fn count(&self, species: Species) -> usize {
        match species {
            Species::Fish => self.fish,
            Species::Shark => self.sharks,
        }
    }

    pub fn total(&self) -> usize {
        self.fish + self.sharks
    }

    /// Both species are gone
    pub fn is_extinct(&self) -> bool {
        self.total() == 0
    }
}

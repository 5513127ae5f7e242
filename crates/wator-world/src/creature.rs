//! Creature state.

use serde::{Deserialize, Serialize};
use wator_core::{Rules, Species};

/// A fish or shark.
///
/// Creatures are plain values: moving one into the next grid copies it, so
/// the grid being read and the grid being built never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub species: Species,
    /// Chronons alive
    pub age: u32,
    /// Remaining energy; only sharks use it
    pub energy: i64,
    /// Chronons since last reproduction
    pub breed_timer: u32,
}

impl Creature {
    pub fn fish() -> Self {
        Self {
            species: Species::Fish,
            age: 0,
            energy: 0,
            breed_timer: 0,
        }
    }

    pub fn shark(energy: u32) -> Self {
        Self {
            species: Species::Shark,
            age: 0,
            energy: i64::from(energy),
            breed_timer: 0,
        }
    }

    /// A newborn of `species` as the rules prescribe
    pub fn newborn(species: Species, rules: &Rules) -> Self {
        match species {
            Species::Fish => Self::fish(),
            Species::Shark => Self::shark(rules.starve),
        }
    }

    pub fn is_fish(&self) -> bool {
        self.species == Species::Fish
    }

    pub fn is_shark(&self) -> bool {
        self.species == Species::Shark
    }

    pub fn tick(&mut self) {
        self.age += 1;
        self.breed_timer += 1;
    }

    /// Burn one unit of energy. Returns false once the shark has starved.
    pub fn metabolize(&mut self) -> bool {
        self.energy -= 1;
        self.energy > 0
    }

    /// A meal restores energy to the starvation ceiling
    pub fn feed(&mut self, rules: &Rules) {
        self.energy = i64::from(rules.starve);
    }

    pub fn breed_threshold(&self, rules: &Rules) -> u32 {
        match self.species {
            Species::Fish => rules.fish_breed,
            Species::Shark => rules.shark_breed,
        }
    }

    pub fn can_breed(&self, rules: &Rules) -> bool {
        self.breed_timer >= self.breed_threshold(rules)
    }

    /// Reset the breed timer and hand back the child left in the vacated cell
    pub fn reproduce(&mut self, rules: &Rules) -> Creature {
        self.breed_timer = 0;
        Self::newborn(self.species, rules)
    }
}

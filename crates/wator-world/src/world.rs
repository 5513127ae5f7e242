//! World state: the grid plus the rules it evolves under.

use crate::chronon::{self, ChrononEvents};
use crate::creature::Creature;
use crate::grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};
use wator_core::{Census, Error, Position, Result, Rules, SimulationConfig, Species};

/// One generation of the ocean.
///
/// A `World` is never edited by the chronon engine; each step consumes it and
/// returns a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub(crate) grid: Grid,
    pub(crate) rules: Rules,
    pub(crate) chronon: u64,
    pub(crate) events: ChrononEvents,
}

impl World {
    /// Empty world of `size`x`size` cells
    pub fn new(size: usize, rules: Rules) -> Self {
        Self {
            grid: Grid::new(size),
            rules,
            chronon: 0,
            events: ChrononEvents::default(),
        }
    }

    /// Create and populate a world from configuration
    pub fn from_config<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut world = Self::new(config.grid_size, config.rules);
        world.populate(config.initial_sharks, config.initial_fish, rng)?;

        info!(
            grid_size = config.grid_size,
            sharks = config.initial_sharks,
            fish = config.initial_fish,
            fish_breed = config.rules.fish_breed,
            shark_breed = config.rules.shark_breed,
            starve = config.rules.starve,
            "World initialized"
        );

        Ok(world)
    }

    /// Scatter sharks and fish onto distinct, uniformly chosen empty cells.
    ///
    /// Sharks are placed first, at full energy.
    pub fn populate<R: Rng + ?Sized>(
        &mut self,
        sharks: usize,
        fish: usize,
        rng: &mut R,
    ) -> Result<()> {
        let mut vacant = self.grid.vacant_positions();
        let requested = sharks.saturating_add(fish);
        if requested > vacant.len() {
            return Err(Error::Overpopulated {
                requested,
                available: vacant.len(),
            });
        }

        let (chosen, _) = vacant.partial_shuffle(rng, requested);
        let (shark_cells, fish_cells) = chosen.split_at(sharks);

        for &pos in shark_cells {
            self.grid.place(pos, Creature::newborn(Species::Shark, &self.rules))?;
        }
        for &pos in fish_cells {
            self.grid.place(pos, Creature::newborn(Species::Fish, &self.rules))?;
        }

        debug!(sharks, fish, "Population scattered");
        Ok(())
    }

    /// Put a single creature on an empty cell
    pub fn place(&mut self, pos: Position, creature: Creature) -> Result<()> {
        self.grid.place(pos, creature)
    }

    /// Advance one chronon; see [`chronon::process_chronon`]
    pub fn step<R: Rng + ?Sized>(self, rng: &mut R) -> Result<World> {
        chronon::process_chronon(self, rng)
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Number of chronons applied so far
    pub fn chronon(&self) -> u64 {
        self.chronon
    }

    /// What happened during the chronon that produced this world
    pub fn events(&self) -> &ChrononEvents {
        &self.events
    }

    pub fn get(&self, pos: Position) -> Option<&Creature> {
        self.grid.get(pos)
    }

    /// Species occupying `pos`, for rendering
    pub fn species_at(&self, pos: Position) -> Option<Species> {
        self.grid.get(pos).map(|c| c.species)
    }

    pub fn census(&self) -> Census {
        Census::tally(self.grid.iter().map(|(_, c)| c.species))
    }
}

/// Count fish and sharks without touching the world
pub fn count_population(world: &World) -> Census {
    world.census()
}

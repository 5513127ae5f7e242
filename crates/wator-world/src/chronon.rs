//! The chronon transition engine.
//!
//! One call reads the current grid and writes a brand-new one. Creatures only
//! ever look at the old grid for what is *there* and at the new grid for what
//! has already been *claimed*, so every decision in a chronon behaves as if it
//! happened at the same instant.

use crate::creature::Creature;
use crate::grid::Grid;
use crate::world::World;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};
use wator_core::{Position, Result, Rules, Species};

/// Tallies of what happened during a single chronon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChrononEvents {
    pub fish_born: usize,
    pub sharks_born: usize,
    /// Meals taken by sharks
    pub fish_eaten: usize,
    /// Meals taken at a cell whose fish had already swum off earlier in the
    /// scan; that fish lives on
    pub fish_escaped: usize,
    pub sharks_starved: usize,
    /// Creatures that changed cell (parents that bred included)
    pub moves: usize,
    /// Creatures boxed in with nowhere to go
    pub stays: usize,
}

impl ChrononEvents {
    fn record_birth(&mut self, species: Species) {
        match species {
            Species::Fish => self.fish_born += 1,
            Species::Shark => self.sharks_born += 1,
        }
    }

    pub fn births(&self) -> usize {
        self.fish_born + self.sharks_born
    }

    /// Fish actually removed from the ocean
    pub fn fish_killed(&self) -> usize {
        self.fish_eaten - self.fish_escaped
    }

    pub fn deaths(&self) -> usize {
        self.fish_killed() + self.sharks_starved
    }
}

/// Advance `world` by one chronon.
///
/// The old world is consumed; its grid is only read from and is dropped once
/// the new one is complete. Cells are scanned in row-major order and every
/// random choice is drawn from `rng`, so a seeded generator replays a run
/// exactly.
#[instrument(level = "debug", skip_all, fields(chronon = world.chronon + 1))]
pub fn process_chronon<R: Rng + ?Sized>(world: World, rng: &mut R) -> Result<World> {
    let World {
        grid: old,
        rules,
        chronon,
        ..
    } = world;

    let mut transition = Transition::new(&old, rules);
    for (pos, creature) in old.iter() {
        transition.process(pos, *creature, rng)?;
    }
    let Transition {
        next,
        mut events,
        skipped,
        ..
    } = transition;
    events.fish_escaped = events.fish_eaten - skipped;

    debug!(
        fish_born = events.fish_born,
        sharks_born = events.sharks_born,
        fish_eaten = events.fish_eaten,
        fish_escaped = events.fish_escaped,
        sharks_starved = events.sharks_starved,
        moves = events.moves,
        stays = events.stays,
        "Chronon complete"
    );

    Ok(World {
        grid: next,
        rules,
        chronon: chronon + 1,
        events,
    })
}

/// State of a single scan: the grid being read and the grid being built
struct Transition<'a> {
    old: &'a Grid,
    next: Grid,
    rules: Rules,
    events: ChrononEvents,
    /// Eaten fish dropped before their turn came up
    skipped: usize,
}

impl<'a> Transition<'a> {
    fn new(old: &'a Grid, rules: Rules) -> Self {
        Self {
            old,
            next: Grid::new(old.size()),
            rules,
            events: ChrononEvents::default(),
            skipped: 0,
        }
    }

    fn size(&self) -> usize {
        self.old.size()
    }

    fn process<R: Rng + ?Sized>(
        &mut self,
        pos: Position,
        mut creature: Creature,
        rng: &mut R,
    ) -> Result<()> {
        // A creature only reaches a cell that was empty in the old grid, or
        // one holding prey. Children stay in the parent's (already scanned)
        // cell. So an occupied, unscanned cell means this fish was eaten.
        if !self.next.is_vacant(pos) {
            trace!(%pos, "Skipping eaten fish");
            self.skipped += 1;
            return Ok(());
        }

        creature.tick();

        match creature.species {
            Species::Fish => self.process_fish(pos, creature, rng),
            Species::Shark => self.process_shark(pos, creature, rng),
        }
    }

    fn process_fish<R: Rng + ?Sized>(
        &mut self,
        pos: Position,
        fish: Creature,
        rng: &mut R,
    ) -> Result<()> {
        let destination = self.vacant_neighbors(pos).choose(rng).copied();
        self.move_or_breed(pos, destination, fish)
    }

    fn process_shark<R: Rng + ?Sized>(
        &mut self,
        pos: Position,
        mut shark: Creature,
        rng: &mut R,
    ) -> Result<()> {
        if !shark.metabolize() {
            trace!(%pos, age = shark.age, "Shark starved");
            self.events.sharks_starved += 1;
            return Ok(());
        }

        if let Some(&prey) = self.prey_neighbors(pos).choose(rng) {
            shark.feed(&self.rules);
            self.events.fish_eaten += 1;
            trace!(%pos, %prey, "Shark ate a fish");
            return self.move_or_breed(pos, Some(prey), shark);
        }

        let destination = self.vacant_neighbors(pos).choose(rng).copied();
        self.move_or_breed(pos, destination, shark)
    }

    /// Neighbors that are empty now and have not been claimed this chronon
    fn vacant_neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors(self.size())
            .into_iter()
            .filter(|n| self.old.is_vacant(*n) && self.next.is_vacant(*n))
            .collect()
    }

    /// Neighbors that held a fish at the start of the chronon and have not
    /// been claimed since.
    ///
    /// A fish scanned earlier that swam off still counts: its old cell is
    /// unclaimed, so the shark takes the meal there while the fish survives
    /// at its new cell.
    fn prey_neighbors(&self, pos: Position) -> Vec<Position> {
        pos.neighbors(self.size())
            .into_iter()
            .filter(|n| {
                self.old.get(*n).is_some_and(Creature::is_fish) && self.next.is_vacant(*n)
            })
            .collect()
    }

    /// Move to `destination`, leaving a child behind when the breed timer is up.
    /// With no destination the creature stays put and does not breed.
    fn move_or_breed(
        &mut self,
        pos: Position,
        destination: Option<Position>,
        mut creature: Creature,
    ) -> Result<()> {
        let Some(destination) = destination else {
            self.events.stays += 1;
            return self.next.place(pos, creature);
        };

        if creature.can_breed(&self.rules) {
            let child = creature.reproduce(&self.rules);
            self.next.place(pos, child)?;
            self.events.record_birth(child.species);
            trace!(%pos, species = %child.species, "Creature reproduced");
        }

        self.next.place(destination, creature)?;
        self.events.moves += 1;
        Ok(())
    }
}

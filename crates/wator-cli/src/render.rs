//! Console output for the driver.

use serde::Serialize;
use wator_core::{Census, Position};
use wator_world::{ChrononEvents, World};

/// The grid as rows of `". "`, `"F "` and `"S "`, followed by a blank line
pub fn render_grid(world: &World) -> String {
    let size = world.size();
    let mut out = String::with_capacity((size * 2 + 1) * size + 1);

    for y in 0..size {
        for x in 0..size {
            let symbol = world
                .species_at(Position::new(x, y))
                .map_or('.', |s| s.symbol());
            out.push(symbol);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

pub fn status_line(chronon: u64, census: &Census) -> String {
    format!(
        "Chronon {} | Fish={} | Sharks={}",
        chronon, census.fish, census.sharks
    )
}

/// One machine-readable record per chronon
#[derive(Debug, Serialize)]
pub struct CensusRecord {
    pub chronon: u64,
    #[serde(flatten)]
    pub census: Census,
    pub events: ChrononEvents,
}

impl CensusRecord {
    pub fn new(world: &World, census: Census) -> Self {
        Self {
            chronon: world.chronon(),
            census,
            events: *world.events(),
        }
    }
}

use clap::Parser;
use wator_core::{Rules, RunConfig, SimulationConfig};

#[derive(Parser, Debug)]
#[command(name = "wator", version, about = "Wa-Tor predator-prey simulation on a toroidal ocean")]
pub struct Cli {
    /// Width and height of the square grid
    #[arg(long, default_value_t = 50)]
    pub size: usize,

    /// Initial number of sharks
    #[arg(long, default_value_t = 100)]
    pub sharks: usize,

    /// Initial number of fish
    #[arg(long, default_value_t = 300)]
    pub fish: usize,

    /// Chronons a fish must live before reproducing
    #[arg(long, default_value_t = 3)]
    pub fish_breed: u32,

    /// Chronons a shark must live before reproducing
    #[arg(long, default_value_t = 10)]
    pub shark_breed: u32,

    /// Shark energy at birth and after each meal
    #[arg(long, default_value_t = 5)]
    pub starve: u32,

    /// Stop after this many chronons
    #[arg(long, default_value_t = 10_000)]
    pub chronons: u64,

    /// Pause between chronons in milliseconds (0 runs flat out)
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Random seed; drawn from entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print only the population line, not the grid
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit one JSON census record per chronon instead of text
    #[arg(long)]
    pub json: bool,

    /// Write logs to stderr as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            grid_size: self.size,
            initial_sharks: self.sharks,
            initial_fish: self.fish,
            rules: Rules {
                fish_breed: self.fish_breed,
                shark_breed: self.shark_breed,
                starve: self.starve,
            },
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            max_chronons: self.chronons,
            delay_ms: self.delay_ms,
            seed: self.seed,
        }
    }
}

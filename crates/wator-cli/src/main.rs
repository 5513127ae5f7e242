//! Console driver for the Wa-Tor simulation.

mod args;
mod render;
mod telemetry;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use render::{render_grid, status_line, CensusRecord};
use std::io::{self, BufWriter, Write};
use tokio::signal;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{error, info, warn};
use wator_core::{Census, RunConfig};
use wator_world::{count_population, process_chronon, seeded_rng, SimRng, World};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Grid,
    Quiet,
    Json,
}

impl Output {
    fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            Output::Json
        } else if cli.quiet {
            Output::Quiet
        } else {
            Output::Grid
        }
    }
}

/// How a run ended
#[derive(Debug)]
enum Outcome {
    Extinct { chronon: u64 },
    BudgetReached { census: Census },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(cli.log_json)?;

    let sim_config = cli.simulation_config();
    let run_config = cli.run_config();
    let seed = run_config.seed.unwrap_or_else(rand::random);
    let output = Output::from_cli(&cli);

    info!(seed, max_chronons = run_config.max_chronons, "Starting Wa-Tor simulation");

    let mut rng = seeded_rng(seed);
    let world = World::from_config(&sim_config, &mut rng)
        .context("failed to initialize world")?;

    tokio::select! {
        result = run(world, rng, &run_config, output) => {
            match result? {
                Outcome::Extinct { chronon } => info!(chronon, "All life extinct"),
                Outcome::BudgetReached { census } => info!(
                    fish = census.fish,
                    sharks = census.sharks,
                    "Chronon budget reached"
                ),
            }
        }
        _ = shutdown_signal() => {
            warn!("Simulation interrupted");
        }
    }

    Ok(())
}

async fn run(
    mut world: World,
    mut rng: SimRng,
    config: &RunConfig,
    output: Output,
) -> Result<Outcome> {
    let mut stdout = BufWriter::new(io::stdout());
    let mut ticker = (config.delay_ms > 0).then(|| {
        let mut ticker = interval(Duration::from_millis(config.delay_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    });

    if output != Output::Json {
        writeln!(stdout, "Wa-Tor Simulation:")?;
    }

    let mut census = count_population(&world);
    for _ in 0..config.max_chronons {
        world = process_chronon(world, &mut rng).context("chronon transition failed")?;
        census = count_population(&world);

        report(&mut stdout, &world, census, output)?;

        if census.is_extinct() {
            if output != Output::Json {
                writeln!(stdout, "All life extinct!")?;
            }
            stdout.flush()?;
            return Ok(Outcome::Extinct {
                chronon: world.chronon(),
            });
        }

        if world.chronon() % 1000 == 0 {
            let events = world.events();
            info!(
                chronon = world.chronon(),
                fish = census.fish,
                sharks = census.sharks,
                births = events.births(),
                deaths = events.deaths(),
                "Progress"
            );
        }

        match ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => tokio::task::yield_now().await,
        }
    }

    stdout.flush()?;
    Ok(Outcome::BudgetReached { census })
}

fn report<W: Write>(out: &mut W, world: &World, census: Census, output: Output) -> Result<()> {
    match output {
        Output::Json => {
            let record = CensusRecord::new(world, census);
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        }
        Output::Quiet => {
            writeln!(out, "{}", status_line(world.chronon(), &census))?;
        }
        Output::Grid => {
            writeln!(out, "{}", status_line(world.chronon(), &census))?;
            write!(out, "{}", render_grid(world))?;
        }
    }
    out.flush()?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use wator_core::{Position, Rules};
    use wator_world::Creature;

    #[test]
    fn test_output_mode_selection() {
        assert_eq!(Output::from_cli(&Cli::parse_from(["wator"])), Output::Grid);
        assert_eq!(Output::from_cli(&Cli::parse_from(["wator", "-q"])), Output::Quiet);
        assert_eq!(Output::from_cli(&Cli::parse_from(["wator", "--json"])), Output::Json);
    }

    #[test]
    fn test_report_grid() {
        let mut world = World::new(2, Rules::default());
        world.place(Position::new(1, 1), Creature::fish()).unwrap();
        let census = world.census();

        let mut buf = Vec::new();
        report(&mut buf, &world, census, Output::Grid).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Chronon 0 | Fish=1 | Sharks=0\n. . \n. F \n\n");
    }

    #[test]
    fn test_report_json_line() {
        let world = World::new(2, Rules::default());
        let mut buf = Vec::new();
        report(&mut buf, &world, world.census(), Output::Json).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["sharks"], 0);
    }

    #[tokio::test]
    async fn test_run_stops_on_extinction() {
        // A lone shark with one unit of energy starves in the first chronon
        let mut world = World::new(1, Rules::default());
        let mut shark = Creature::shark(5);
        shark.energy = 1;
        world.place(Position::new(0, 0), shark).unwrap();

        let config = RunConfig {
            max_chronons: 10,
            delay_ms: 0,
            seed: Some(0),
        };
        let outcome = run(world, seeded_rng(0), &config, Output::Json).await.unwrap();
        assert!(matches!(outcome, Outcome::Extinct { chronon: 1 }));
    }

    #[tokio::test]
    async fn test_run_stops_at_budget() {
        let mut world = World::new(4, Rules::default());
        world.place(Position::new(0, 0), Creature::fish()).unwrap();

        let config = RunConfig {
            max_chronons: 3,
            delay_ms: 0,
            seed: Some(0),
        };
        let outcome = run(world, seeded_rng(1), &config, Output::Json).await.unwrap();
        match outcome {
            Outcome::BudgetReached { census } => assert_eq!(census.sharks, 0),
            other => panic!("expected budget stop, got {:?}", other),
        }
    }
}

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use overwatch_app::game_loop::{self, LoopConfig};
use overwatch_app::init_logging;
use overwatch_app::render::{JsonLinesSink, LogSink, SnapshotSink};
use overwatch_core::config::{AssetConfig, ScenarioConfig};
use overwatch_sim::world_setup::random_raid;
use overwatch_sim::{SimConfig, SimulationEngine};

/// Tower-defence interception simulation
#[derive(Parser)]
#[command(name = "overwatch", author, version, about, long_about = None)]
struct Args {
    /// Scenario JSON file. Defaults to the reference layout.
    #[arg(long, conflicts_with = "random")]
    scenario: Option<PathBuf>,

    /// Generate a random raid with this many targets instead
    #[arg(long, value_name = "COUNT")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many ticks if targets remain
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Pace ticks at the wall-clock interval instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Write one JSON snapshot per line to stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario file: {}", path.display()))?;
    ScenarioConfig::from_json_str(&json)
        .with_context(|| format!("parsing scenario file: {}", path.display()))
}

fn scenario(args: &Args) -> Result<ScenarioConfig> {
    if let Some(path) = &args.scenario {
        return load_scenario(path);
    }
    if let Some(count) = args.random {
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        return Ok(random_raid(&mut rng, AssetConfig::default(), count));
    }
    Ok(ScenarioConfig::default())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let scenario = scenario(&args)?;
    let mut engine =
        SimulationEngine::new(SimConfig::default(), &scenario).context("invalid scenario")?;
    log::info!(
        "{} targets inbound, {} interceptors on station",
        scenario.targets.len(),
        scenario.interceptors.len()
    );

    let mut sink: Box<dyn SnapshotSink + Send> = if args.json {
        Box::new(JsonLinesSink::new(io::stdout()))
    } else {
        Box::new(LogSink)
    };

    let summary = if args.realtime {
        let config = LoopConfig {
            max_ticks: args.ticks,
            ..Default::default()
        };
        game_loop::spawn_game_loop(engine, sink, config)
            .context("starting game loop thread")?
            .join()?
    } else {
        game_loop::run_headless(&mut engine, &mut sink, args.ticks)?
    };

    log::info!(
        "stopped after {} ticks ({:?}): {} targets destroyed, {} interceptors expended",
        summary.ticks,
        summary.reason,
        summary.targets_destroyed,
        summary.interceptors_expended
    );
    Ok(())
}

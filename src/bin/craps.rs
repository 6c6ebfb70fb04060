//! Console craps.
//!
//! Plays interactively by default. `--auto` plays a fixed number of rounds
//! without prompting; `--simulate` runs batch sessions and prints a report.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use craps_engine::console::{summary, ConsolePlayer};
use craps_engine::core::{EngineConfig, Roll};
use craps_engine::engine::{RoundEngine, Shared};
use craps_engine::sim::{SimulationConfig, SimulationRunner, Strategy};

#[derive(Parser, Debug)]
#[command(name = "craps")]
#[command(about = "Solitaire craps: roll, make your point, don't seven out")]
struct Cli {
    /// Dice seed, for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Play this many rounds without prompting
    #[arg(long, value_name = "ROUNDS", conflicts_with = "simulate")]
    auto: Option<u32>,

    /// Run this many automated sessions and report the totals
    #[arg(long, value_name = "SESSIONS")]
    simulate: Option<u32>,

    /// Rounds per simulated session
    #[arg(long, default_value_t = 10, requires = "simulate")]
    rounds: u32,

    /// Abandon a point after this many rolls when simulating
    #[arg(long, requires = "simulate")]
    patience: Option<u32>,

    /// Print the session transcript as JSON when done
    #[arg(long, conflicts_with = "simulate")]
    history: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(sessions) = cli.simulate {
        return simulate(&cli, sessions);
    }

    let mut config = EngineConfig::new().with_history(cli.history);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut engine = RoundEngine::from_config(&config);

    match cli.auto {
        Some(rounds) => {
            let player = Shared::new(Strategy::rounds(rounds));
            engine.set_roll_reporter(|roll: Roll| println!("Roll: {roll}"));
            engine.set_round_start_decider(player.clone());
            engine.set_point_decider(player);
        }
        None => {
            let player = Shared::new(ConsolePlayer::stdio());
            engine.set_roll_reporter(player.clone());
            engine.set_round_start_decider(player.clone());
            engine.set_point_decider(player);
        }
    }

    engine.play().context("session aborted")?;
    println!("{}", summary(engine.wins().into(), engine.losses().into()));

    if let Some(transcript) = engine.transcript() {
        let json = serde_json::to_string_pretty(transcript).context("encoding transcript")?;
        println!("{json}");
    }
    Ok(())
}

fn simulate(cli: &Cli, sessions: u32) -> Result<()> {
    let mut config = SimulationConfig::new()
        .with_sessions(sessions)
        .with_rounds(cli.rounds);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(patience) = cli.patience {
        config = config.with_patience(patience);
    }

    let report = SimulationRunner::new(config).run().context("simulation failed")?;

    println!("{} sessions, {} rolls", report.sessions, report.rolls);
    println!("{}", summary(report.wins, report.losses));
    println!("{:.2} rolls per round", report.rolls_per_round());
    if report.abandoned > 0 {
        println!("{} sessions ended by abandoning a point", report.abandoned);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

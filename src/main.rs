//! Penta Snake entry point
//!
//! Headless runner: builds a simulation from a config file and/or preset,
//! ticks it at a fixed step and prints JSON snapshots, one per line. A
//! renderer can consume the same snapshots.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use penta_snake::{ArenaPreset, SimConfig};

#[derive(Parser)]
#[command(name = "penta-snake", about = "Bouncing snake in a rotating pentagon")]
struct Args {
    /// JSON config file (missing fields fall back to defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Arena preset applied on top of the config: compact, standard, large, long
    #[arg(long)]
    preset: Option<ArenaPreset>,
    /// Seed for a random launch heading
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// Print a snapshot every N ticks (0 prints only the first and last)
    #[arg(long, default_value_t = 60)]
    every: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(preset) = args.preset {
        log::info!("Applying preset {preset}");
        config.apply_preset(preset);
    }
    if let Some(seed) = args.seed {
        config.launch_seed = Some(seed);
    }

    let mut state = config.build()?;
    if !state
        .polygon
        .contains(state.body.position(), state.body.radius())
    {
        log::warn!("Head starts outside the wall margin; the first tick will push it in");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "{}", serde_json::to_string(&state.snapshot())?)?;

    let mut bounces = 0u64;
    for _ in 0..args.ticks {
        state.tick();
        if state.bounced() {
            bounces += 1;
        }
        if args.every > 0 && state.time_ticks % args.every == 0 {
            writeln!(out, "{}", serde_json::to_string(&state.snapshot())?)?;
        }
    }
    if args.ticks > 0 && (args.every == 0 || args.ticks % args.every != 0) {
        writeln!(out, "{}", serde_json::to_string(&state.snapshot())?)?;
    }
    out.flush()?;

    log::info!(
        "Ran {} ticks: {} bounces, head at ({:.1}, {:.1})",
        state.time_ticks,
        bounces,
        state.body.position().x,
        state.body.position().y
    );
    Ok(())
}

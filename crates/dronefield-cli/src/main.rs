//! Dronefield console front end.
//!
//! Collects field dimensions, drone starts, and movement strings through an
//! interactive dialog, runs the simulation, and prints final locations,
//! intersections, and an ASCII rendering of the field.

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use dronefield_core::DetectionPolicy;

mod console;
mod render;

use console::{Console, RunOptions};

/// Command line arguments for the simulator.
#[derive(Parser, Debug)]
#[command(name = "dronefield")]
#[command(about = "Simulates drones on a bounded grid and reports intersections")]
struct Args {
    /// Coincidence tolerance for intersection detection
    #[arg(long, default_value_t = dronefield_core::DEFAULT_TOLERANCE)]
    tolerance: f32,

    /// Which positions of each path participate in detection
    #[arg(long, value_enum, default_value = "full-path")]
    policy: PolicyArg,

    /// Distance between adjacent grid points
    #[arg(long, default_value_t = 1.0)]
    pitch: f32,

    /// Print the mission report as JSON instead of the rendered output
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Compare every visited position of both paths
    FullPath,
    /// Compare only final positions
    FinalOnly,
}

impl From<PolicyArg> for DetectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FullPath => Self::FullPath,
            PolicyArg::FinalOnly => Self::FinalOnly,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let options = RunOptions {
        pitch: args.pitch,
        tolerance: args.tolerance,
        policy: args.policy.into(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());

    let mission = console.collect_mission(&options)?;
    let report = mission.run();

    if args.json {
        drop(console);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        console.present(mission.field(), &report)?;
    }

    Ok(())
}

mod cli;
mod config;
mod error;
mod evaluate;
mod gate;
mod input;
mod report;
mod types;

use crate::config::InputPaths;
use crate::error::FitnessError;
use crate::gate::{EmitGate, RandomGate};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads both inputs under `root`, scores them and returns the result line if
/// the gate lets it through.
fn evaluate_dir(root: &Path, gate: &mut impl EmitGate) -> Result<Option<String>, FitnessError> {
    let paths = InputPaths::under(root);
    let d1 = input::load_sequence(&paths.first)?;
    let d2 = input::load_sequence(&paths.second)?;

    let evaluation = evaluate::evaluate(&d1, &d2)?;
    if !gate.should_emit() {
        info!(runtime = evaluation.runtime, "result suppressed for this run");
        return Ok(None);
    }
    info!(runtime = evaluation.runtime, "reporting result");
    Ok(Some(report::render_result_line(&evaluation)))
}

fn run() -> Result<i32, FitnessError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level());

    let mut gate = RandomGate::from_thread_rng();
    if let Some(line) = evaluate_dir(Path::new("."), &mut gate)? {
        println!("{line}");
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

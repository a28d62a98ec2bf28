//! `contact-evolution` -- command-line driver for the Contact Evolution
//! simulation.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Parse command-line flags
//! 3. Load configuration from `--config` or `contact-evolution.yaml`
//! 4. Apply flag overrides
//! 5. Create contacts, run the simulation, render audio and frames
//! 6. Print the run summary

mod cli;
mod error;
mod pipeline;

use std::path::Path;

use clap::Parser;
use contact_core::EvolutionConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::error::EngineError;

/// Configuration file picked up from the working directory when no
/// `--config` flag is given.
const DEFAULT_CONFIG_PATH: &str = "contact-evolution.yaml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();
    let mut config = load_config(&args)?;
    args.apply(&mut config);
    info!(
        steps = config.simulation.steps,
        dt = config.simulation.dt,
        contacts = config.simulation.contacts,
        seed = config.simulation.seed,
        "Configuration loaded"
    );

    let summary = pipeline::run(&config, args.snapshot_log.as_deref())?;
    info!(
        snapshots = summary.snapshots,
        audio_samples = summary.audio_samples,
        frames = summary.frame_paths.len(),
        snapshot_log = ?summary.snapshot_log,
        "Run complete"
    );
    println!("{}", summary.report());
    Ok(())
}

/// Load the run configuration.
///
/// An explicit `--config` path must exist. Without one, the default file is
/// used when present and the built-in defaults otherwise.
fn load_config(args: &Args) -> Result<EvolutionConfig, EngineError> {
    if let Some(path) = &args.config {
        return Ok(EvolutionConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        Ok(EvolutionConfig::from_file(default_path)?)
    } else {
        info!("Config file not found, using defaults");
        Ok(EvolutionConfig::default())
    }
}

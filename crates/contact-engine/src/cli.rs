//! Command-line arguments.
//!
//! Every flag is optional. Unset flags fall back to the configuration file,
//! and unset config fields fall back to the built-in defaults shown in the
//! help text.

use std::path::PathBuf;

use clap::Parser;
use contact_core::EvolutionConfig;

/// Contact evolution generator: simulate attracting/repelling contacts and
/// render the run as audio and image frames.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about)]
pub struct Args {
    /// Number of simulation steps [default: 60]
    #[arg(long)]
    pub steps: Option<usize>,

    /// Fixed timestep [default: 0.05]
    #[arg(long)]
    pub dt: Option<f64>,

    /// Number of contacts [default: 8]
    #[arg(long)]
    pub contacts: Option<usize>,

    /// Output WAV path [default: contact_evolution.wav]
    #[arg(long)]
    pub audio: Option<PathBuf>,

    /// Output directory for PPM frames [default: frames]
    #[arg(long)]
    pub frames_dir: Option<PathBuf>,

    /// Seed for contact placement [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// YAML configuration file [default: contact-evolution.yaml, if present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write every snapshot as JSON Lines to this path
    #[arg(long)]
    pub snapshot_log: Option<PathBuf>,
}

impl Args {
    /// Overwrite config values with the flags that were given.
    pub fn apply(&self, config: &mut EvolutionConfig) {
        if let Some(steps) = self.steps {
            config.simulation.steps = steps;
        }
        if let Some(dt) = self.dt {
            config.simulation.dt = dt;
        }
        if let Some(contacts) = self.contacts {
            config.simulation.contacts = contacts;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(audio) = &self.audio {
            config.audio.path.clone_from(audio);
        }
        if let Some(dir) = &self.frames_dir {
            config.frames.dir.clone_from(dir);
        }
    }
}

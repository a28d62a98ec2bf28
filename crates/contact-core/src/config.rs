//! Configuration loading and typed config structures for a full run.
//!
//! A run is described by an optional `contact-evolution.yaml`. Every field
//! has a default, so an empty file (or no file at all) reproduces the
//! built-in run: 8 contacts, 60 steps of 0.05, seed 42, 44.1 kHz audio and
//! 512x512 frames.
//!
//! ```yaml
//! simulation:
//!   steps: 120
//!   dt: 0.02
//!   contacts: 16
//!   seed: 7
//!   width: 1.0
//!   height: 1.0
//!   damping: 0.98
//! audio:
//!   path: out/evolution.wav
//!   sample_rate: 48000
//!   step_duration: 0.05
//! frames:
//!   dir: out/frames
//!   width: 256
//!   height: 256
//! ```

use std::path::{Path, PathBuf};

use contact_types::Bounds;
use serde::Deserialize;

use crate::engine::{DEFAULT_DAMPING, validate_bounds, validate_damping, validate_dt};
use crate::error::SimError;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level run configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EvolutionConfig {
    /// Physics and contact parameters.
    #[serde(default)]
    pub simulation: SimulationSection,

    /// Audio rendering parameters.
    #[serde(default)]
    pub audio: AudioSection,

    /// Frame rendering parameters.
    #[serde(default)]
    pub frames: FramesSection,
}

impl EvolutionConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Check the simulation values the engine would reject, so a bad
    /// configuration fails before any contacts are created. Audio and frame
    /// settings are checked by their renderers.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidInput`] for the first offending value.
    pub fn validate(&self) -> Result<(), SimError> {
        let sim = &self.simulation;
        validate_dt(sim.dt)?;
        validate_bounds(sim.bounds())?;
        validate_damping(sim.damping)
    }
}

/// Physics and contact parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimulationSection {
    /// Number of steps to run.
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Fixed timestep.
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Number of contacts to create.
    #[serde(default = "default_contacts")]
    pub contacts: usize,

    /// Seed for the contact factory.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Width of the simulation area.
    #[serde(default = "default_extent")]
    pub width: f64,

    /// Height of the simulation area.
    #[serde(default = "default_extent")]
    pub height: f64,

    /// Per-step velocity damping.
    #[serde(default = "default_damping")]
    pub damping: f64,
}

impl SimulationSection {
    /// The configured simulation area.
    pub const fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            dt: default_dt(),
            contacts: default_contacts(),
            seed: default_seed(),
            width: default_extent(),
            height: default_extent(),
            damping: default_damping(),
        }
    }
}

/// Audio rendering parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AudioSection {
    /// Output WAV path.
    #[serde(default = "default_audio_path")]
    pub path: PathBuf,

    /// Samples per second.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Seconds of audio rendered per snapshot.
    #[serde(default = "default_step_duration")]
    pub step_duration: f64,
}

impl Default for AudioSection {
    fn default() -> Self {
        Self {
            path: default_audio_path(),
            sample_rate: default_sample_rate(),
            step_duration: default_step_duration(),
        }
    }
}

/// Frame rendering parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FramesSection {
    /// Output directory for frame files.
    #[serde(default = "default_frames_dir")]
    pub dir: PathBuf,

    /// Frame width in pixels.
    #[serde(default = "default_frame_extent")]
    pub width: u32,

    /// Frame height in pixels.
    #[serde(default = "default_frame_extent")]
    pub height: u32,
}

impl Default for FramesSection {
    fn default() -> Self {
        Self {
            dir: default_frames_dir(),
            width: default_frame_extent(),
            height: default_frame_extent(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_steps() -> usize {
    60
}

const fn default_dt() -> f64 {
    0.05
}

const fn default_contacts() -> usize {
    8
}

const fn default_seed() -> u64 {
    42
}

const fn default_extent() -> f64 {
    1.0
}

const fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_audio_path() -> PathBuf {
    PathBuf::from("contact_evolution.wav")
}

const fn default_sample_rate() -> u32 {
    44_100
}

const fn default_step_duration() -> f64 {
    0.1
}

fn default_frames_dir() -> PathBuf {
    PathBuf::from("frames")
}

const fn default_frame_extent() -> u32 {
    512
}

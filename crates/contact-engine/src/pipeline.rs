//! The full run: factory, runner, then every renderer.
//!
//! All configuration is validated up front, so invalid input never leaves
//! partial output behind. Render failures abort the run immediately.

use std::path::{Path, PathBuf};

use contact_core::{EvolutionConfig, create_contacts, run_simulation};
use contact_render::{
    AudioSettings, FrameSize, generate_audio, generate_visual_frames, write_snapshot_log,
};

use crate::error::EngineError;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of snapshots simulated.
    pub snapshots: usize,
    /// Where the audio was written.
    pub audio_path: PathBuf,
    /// Number of audio samples written.
    pub audio_samples: usize,
    /// Directory holding the frames.
    pub frames_dir: PathBuf,
    /// Every frame file, in order.
    pub frame_paths: Vec<PathBuf>,
    /// Where the snapshot log was written, if requested.
    pub snapshot_log: Option<PathBuf>,
}

impl RunSummary {
    /// The three-line report printed at the end of a run.
    pub fn report(&self) -> String {
        format!(
            "Generated {} snapshots\nAudio written to {}\nFrames written to {}",
            self.snapshots,
            self.audio_path.display(),
            self.frames_dir.display()
        )
    }
}

/// Simulate and render one run described by `config`.
///
/// # Errors
///
/// Returns [`EngineError::Simulation`] for invalid simulation values and
/// [`EngineError::Render`] for invalid audio or frame settings or if any
/// output cannot be written.
pub fn run(
    config: &EvolutionConfig,
    snapshot_log: Option<&Path>,
) -> Result<RunSummary, EngineError> {
    config.validate()?;
    let audio_settings = AudioSettings {
        sample_rate: config.audio.sample_rate,
        step_duration: config.audio.step_duration,
    };
    audio_settings.validate()?;
    let frame_size = FrameSize::new(config.frames.width, config.frames.height);
    frame_size.validate()?;
    let sim = &config.simulation;

    let contacts = create_contacts(sim.contacts, sim.seed)?;
    let snapshots = run_simulation(sim.steps, sim.dt, &contacts, sim.bounds(), sim.damping)?;

    let audio_samples = generate_audio(&snapshots, &config.audio.path, &audio_settings)?;

    let frame_paths = generate_visual_frames(&snapshots, &config.frames.dir, frame_size)?;

    if let Some(path) = snapshot_log {
        write_snapshot_log(&snapshots, path)?;
    }

    Ok(RunSummary {
        snapshots: snapshots.len(),
        audio_path: config.audio.path.clone(),
        audio_samples,
        frames_dir: config.frames.dir.clone(),
        frame_paths,
        snapshot_log: snapshot_log.map(Path::to_path_buf),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn small_config(root: &Path) -> EvolutionConfig {
        let mut config = EvolutionConfig::default();
        config.simulation.steps = 4;
        config.simulation.contacts = 3;
        config.audio.path = root.join("run.wav");
        config.audio.sample_rate = 8000;
        config.frames.dir = root.join("frames");
        config.frames.width = 16;
        config.frames.height = 16;
        config
    }

    #[test]
    fn run_writes_every_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let log = dir.path().join("snapshots.jsonl");

        let summary = run(&config, Some(&log)).unwrap();

        assert_eq!(summary.snapshots, 4);
        assert_eq!(summary.audio_samples, 4 * 800);
        assert_eq!(summary.frame_paths.len(), 4);
        assert!(summary.audio_path.is_file());
        assert!(summary.frame_paths.iter().all(|p| p.is_file()));
        assert_eq!(std::fs::read_to_string(&log).unwrap().lines().count(), 4);
    }

    #[test]
    fn report_has_three_lines() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let summary = run(&config, None).unwrap();

        let report = summary.report();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.first(), Some(&"Generated 4 snapshots"));
        assert!(lines.get(1).unwrap().starts_with("Audio written to "));
        assert!(lines.get(2).unwrap().starts_with("Frames written to "));
    }

    #[test]
    fn invalid_config_fails_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.simulation.dt = -1.0;

        let result = run(&config, None);
        assert!(matches!(result, Err(EngineError::Simulation { .. })));
        assert!(!config.audio.path.exists());
        assert!(!config.frames.dir.exists());
    }

    #[test]
    fn invalid_frame_size_fails_before_audio_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.frames.height = 0;

        let result = run(&config, None);
        assert!(matches!(result, Err(EngineError::Render { .. })));
        assert!(!config.audio.path.exists());
    }

    #[test]
    fn zero_steps_still_produce_empty_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.simulation.steps = 0;

        let summary = run(&config, None).unwrap();
        assert_eq!(summary.snapshots, 0);
        assert_eq!(summary.audio_samples, 0);
        assert!(summary.frame_paths.is_empty());
        assert!(config.frames.dir.is_dir());
    }
}

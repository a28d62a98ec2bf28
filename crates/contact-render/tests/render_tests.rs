//! Integration tests for the renderers, driven by real simulation runs.
//!
//! Output goes to per-test temporary directories and is read back with
//! `hound` (audio) or as text (frames).

// Integration tests use unwrap extensively for clarity -- panicking on
// failure is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]

use std::path::PathBuf;

use contact_core::{DEFAULT_DAMPING, create_contacts, run_simulation};
use contact_render::{
    AudioSettings, FrameSize, RenderError, generate_audio, generate_visual_frames, render_samples,
};
use contact_types::{Bounds, Snapshot};

fn simulate(steps: usize) -> Vec<Snapshot> {
    let contacts = create_contacts(8, 42).unwrap();
    run_simulation(steps, 0.05, &contacts, Bounds::default(), DEFAULT_DAMPING).unwrap()
}

// =============================================================================
// Audio
// =============================================================================

#[test]
fn audio_has_4410_samples_per_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("evolution.wav");
    let snapshots = simulate(5);

    let written = generate_audio(&snapshots, &path, &AudioSettings::default()).unwrap();
    assert_eq!(written, 5 * 4410);

    let reader = hound::WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(reader.len(), 5 * 4410);
}

#[test]
fn audio_file_matches_rendered_samples() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("evolution.wav");
    let snapshots = simulate(3);
    let settings = AudioSettings {
        sample_rate: 22_050,
        step_duration: 0.05,
    };

    generate_audio(&snapshots, &path, &settings).unwrap();
    let expected = render_samples(&snapshots, &settings).unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let actual: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(actual, expected);
    assert!(actual.iter().any(|&s| s != 0), "moving contacts should be audible");
}

#[test]
fn empty_sequence_writes_valid_empty_wav() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.wav");

    let written = generate_audio(&[], &path, &AudioSettings::default()).unwrap();
    assert_eq!(written, 0);

    let reader = hound::WavReader::open(&path).unwrap();
    assert_eq!(reader.spec().sample_rate, 44_100);
    assert_eq!(reader.len(), 0);
}

#[test]
fn audio_into_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.wav");
    let result = generate_audio(&simulate(1), &path, &AudioSettings::default());
    match result {
        Err(RenderError::Io { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

// =============================================================================
// Frames
// =============================================================================

#[test]
fn one_frame_per_snapshot_with_sequential_names() {
    let dir = tempfile::tempdir().unwrap();
    let frames_dir = dir.path().join("frames");
    let snapshots = simulate(12);

    let paths = generate_visual_frames(&snapshots, &frames_dir, FrameSize::new(32, 24)).unwrap();
    assert_eq!(paths.len(), 12);
    for (index, path) in paths.iter().enumerate() {
        let expected: PathBuf = frames_dir.join(format!("frame_{index:04}.ppm"));
        assert_eq!(path, &expected);
        assert!(path.is_file());
    }
    assert_eq!(paths[0].file_name().unwrap(), "frame_0000.ppm");
    assert_eq!(paths[11].file_name().unwrap(), "frame_0011.ppm");
}

#[test]
fn frame_file_is_plain_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let snapshots = simulate(1);

    let paths = generate_visual_frames(&snapshots, dir.path(), FrameSize::new(16, 8)).unwrap();
    let text = std::fs::read_to_string(&paths[0]).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("16 8"));
    assert_eq!(lines.next(), Some("255"));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 8);
    for row in &rows {
        let values: Vec<u16> = row.split(' ').map(|v| v.parse().unwrap()).collect();
        assert_eq!(values.len(), 16 * 3);
        assert!(values.iter().all(|&v| v <= 255));
    }
    let drawn = rows.iter().any(|row| {
        let values: Vec<&str> = row.split(' ').collect();
        values.chunks(3).any(|px| px != ["12", "12", "24"])
    });
    assert!(drawn, "at least one contact should be drawn");
}

#[test]
fn empty_sequence_creates_nested_directory() {
    let dir = tempfile::tempdir().unwrap();
    let frames_dir = dir.path().join("a").join("b").join("frames");

    let paths = generate_visual_frames(&[], &frames_dir, FrameSize::default()).unwrap();
    assert!(paths.is_empty());
    assert!(frames_dir.is_dir());
}

#[test]
fn zero_sized_frame_is_rejected_before_io() {
    let dir = tempfile::tempdir().unwrap();
    let frames_dir = dir.path().join("never");

    let result = generate_visual_frames(&simulate(1), &frames_dir, FrameSize::new(0, 10));
    assert!(matches!(result, Err(RenderError::InvalidInput { .. })));
    assert!(!frames_dir.exists());
}

#[test]
fn frames_dir_over_a_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let result = generate_visual_frames(&simulate(1), &blocker, FrameSize::default());
    assert!(matches!(result, Err(RenderError::Io { .. })));
}

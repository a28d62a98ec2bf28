//! Snapshot sequence to mono 16-bit PCM audio.
//!
//! Each snapshot becomes a fixed-length block of samples. Every contact is a
//! sine partial: its pitch follows its position, its amplitude follows its
//! affinity, and the phase runs on the simulation clock so consecutive
//! blocks share a continuous timebase. The mix is averaged over the contact
//! count and scaled by a loudness envelope driven by the snapshot energy.
//!
//! | Quantity  | Formula                                   |
//! |-----------|-------------------------------------------|
//! | frequency | `220 + 220 * (x + y) / 2` Hz              |
//! | amplitude | `min(1, affinity)`                        |
//! | phase     | `2 * pi * frequency * (time + k / rate)`  |
//! | envelope  | `min(1, 0.4 + energy)`                    |

use std::f64::consts::TAU;
use std::path::Path;

use contact_types::Snapshot;
use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::{debug, info, warn};

use crate::error::RenderError;

/// Pitch of a contact sitting at the origin.
const BASE_FREQUENCY: f64 = 220.0;

/// Pitch added across the full `(x + y) / 2` range.
const FREQUENCY_SPAN: f64 = 220.0;

/// Envelope floor before energy is added.
const ENVELOPE_FLOOR: f64 = 0.4;

/// Most 16-bit samples a RIFF data chunk can hold (`u32::MAX` bytes).
const MAX_SAMPLES: usize = 2_147_483_647;

/// Sample rate and block length for audio rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSettings {
    /// Samples per second.
    pub sample_rate: u32,
    /// Seconds of audio rendered per snapshot.
    pub step_duration: f64,
}

impl AudioSettings {
    /// Number of samples rendered for each snapshot,
    /// `trunc(sample_rate * step_duration)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn samples_per_snapshot(&self) -> u32 {
        (f64::from(self.sample_rate) * self.step_duration) as u32
    }

    /// Check the settings without rendering anything.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidInput`] for a zero sample rate or a
    /// negative or non-finite step duration.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.sample_rate == 0 {
            return Err(RenderError::invalid("sample rate must be at least 1"));
        }
        if !(self.step_duration.is_finite() && self.step_duration >= 0.0) {
            return Err(RenderError::invalid(format!(
                "step duration must be finite and non-negative, got {}",
                self.step_duration
            )));
        }
        Ok(())
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            step_duration: 0.1,
        }
    }
}

/// Compute the quantized samples for a snapshot sequence without touching
/// the filesystem.
///
/// # Errors
///
/// Returns [`RenderError::InvalidInput`] for a zero sample rate, a negative
/// or non-finite step duration, or a total too long for one WAV file.
pub fn render_samples(
    snapshots: &[Snapshot],
    settings: &AudioSettings,
) -> Result<Vec<i16>, RenderError> {
    settings.validate()?;
    let block = settings.samples_per_snapshot();
    let rate = f64::from(settings.sample_rate);

    let total = usize::try_from(block)
        .ok()
        .and_then(|block| block.checked_mul(snapshots.len()))
        .filter(|&total| total <= MAX_SAMPLES)
        .ok_or_else(|| {
            RenderError::invalid(format!(
                "{block} samples x {} snapshots exceeds the WAV limit",
                snapshots.len()
            ))
        })?;
    let mut samples = Vec::with_capacity(total);

    for snapshot in snapshots {
        let envelope = (ENVELOPE_FLOOR + snapshot.energy()).min(1.0);
        #[allow(clippy::cast_precision_loss)]
        let divisor = snapshot.len().max(1) as f64;
        for k in 0..block {
            let t = f64::from(k) / rate;
            let mix: f64 = snapshot
                .contacts()
                .iter()
                .map(|contact| {
                    let frequency =
                        BASE_FREQUENCY + FREQUENCY_SPAN * (contact.x + contact.y) / 2.0;
                    let amplitude = contact.affinity.min(1.0);
                    let phase = TAU * frequency * (snapshot.time() + t);
                    amplitude * phase.sin()
                })
                .sum();
            samples.push(quantize(mix / divisor * envelope));
        }
    }
    Ok(samples)
}

/// Clamp to `[-1, 1]` and scale to `i16`, truncating toward zero.
#[allow(clippy::cast_possible_truncation)]
fn quantize(value: f64) -> i16 {
    (value.clamp(-1.0, 1.0) * f64::from(i16::MAX)) as i16
}

/// Render the snapshot sequence and write it as a mono 16-bit PCM WAV file.
///
/// An empty sequence produces a valid file with no samples. Returns the
/// number of samples written.
///
/// # Errors
///
/// Returns [`RenderError::InvalidInput`] for invalid settings,
/// [`RenderError::Io`] if the file cannot be created or written, and
/// [`RenderError::Wav`] for other encoder failures.
pub fn generate_audio(
    snapshots: &[Snapshot],
    path: &Path,
    settings: &AudioSettings,
) -> Result<usize, RenderError> {
    let samples = render_samples(snapshots, settings)?;
    if snapshots.is_empty() {
        warn!(path = %path.display(), "No snapshots, writing empty audio file");
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate: settings.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer =
        WavWriter::create(path, spec).map_err(|e| RenderError::from_wav(path, e))?;
    for &sample in &samples {
        writer
            .write_sample(sample)
            .map_err(|e| RenderError::from_wav(path, e))?;
    }
    writer
        .finalize()
        .map_err(|e| RenderError::from_wav(path, e))?;

    debug!(
        samples_per_snapshot = settings.samples_per_snapshot(),
        "Audio blocks rendered"
    );
    info!(
        path = %path.display(),
        samples = samples.len(),
        sample_rate = settings.sample_rate,
        "Audio written"
    );
    Ok(samples.len())
}

//! Media renderers for the Contact Evolution simulation.
//!
//! Every renderer consumes a finished sequence of
//! [`Snapshot`](contact_types::Snapshot)s and nothing else, so any engine
//! that produces snapshots can feed them. The renderers are independent of
//! each other and may run in any order.
//!
//! # Modules
//!
//! - [`audio`] -- Snapshot sequence to mono 16-bit PCM WAV.
//! - [`frames`] -- One plain-text PPM (`P3`) image per snapshot.
//! - [`snapshot_log`] -- Snapshot sequence to JSON Lines.
//! - [`error`] -- [`RenderError`] shared by all renderers.

pub mod audio;
pub mod error;
pub mod frames;
pub mod snapshot_log;

pub use audio::{AudioSettings, generate_audio, render_samples};
pub use error::RenderError;
pub use frames::{Frame, FrameSize, generate_visual_frames, render_frame};
pub use snapshot_log::write_snapshot_log;

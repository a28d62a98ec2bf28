//! Error types for the `contact-render` crate.
//!
//! Renderers fail fast: the first error aborts the render and is returned
//! as-is. Files written before the failure are left on disk.

use std::path::PathBuf;

/// Errors that can occur while rendering snapshots to files.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A render parameter was outside its valid range.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Explanation of what is wrong with the input.
        reason: String,
    },

    /// A file or directory could not be created or written.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// The path being created or written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The WAV encoder rejected the stream.
    #[error("WAV encoding error: {source}")]
    Wav {
        /// The underlying encoder error.
        #[from]
        source: hound::Error,
    },

    /// A snapshot could not be serialized.
    #[error("JSON serialization error: {source}")]
    Json {
        /// The underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl RenderError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Attach the offending path to an I/O error.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Split I/O failures out of encoder errors so they carry the path.
    pub(crate) fn from_wav(path: impl Into<PathBuf>, error: hound::Error) -> Self {
        match error {
            hound::Error::IoError(source) => Self::io(path, source),
            other => Self::Wav { source: other },
        }
    }

    /// Split I/O failures out of serializer errors so they carry the path.
    pub(crate) fn from_json(path: impl Into<PathBuf>, error: serde_json::Error) -> Self {
        if error.is_io() {
            Self::io(path, error.into())
        } else {
            Self::Json { source: error }
        }
    }
}

//! Error types for the `contact-evolution` binary.
//!
//! [`EngineError`] is the top-level error that wraps every failure mode of
//! a run, so `main` can propagate with `?` and exit with a descriptive
//! message.

/// Top-level error for the `contact-evolution` binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: contact_core::ConfigError,
    },

    /// Simulation input was invalid.
    #[error("simulation error: {source}")]
    Simulation {
        /// The underlying simulation error.
        #[from]
        source: contact_core::SimError,
    },

    /// Writing audio, frames, or the snapshot log failed.
    #[error("render error: {source}")]
    Render {
        /// The underlying render error.
        #[from]
        source: contact_render::RenderError,
    },
}

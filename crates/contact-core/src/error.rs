//! Error types for the `contact-core` crate.
//!
//! All fallible simulation operations return [`SimError`]. Every check runs
//! before any state is touched, so an error never leaves an engine
//! half-advanced.

/// Errors that can occur while creating or advancing a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// An argument was outside its valid range (non-positive `dt`,
    /// degenerate bounds, damping outside `(0, 1]`, oversized counts).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Explanation of what is wrong with the input.
        reason: String,
    },
}

impl SimError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

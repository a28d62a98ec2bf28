//! Shared type definitions for the Contact Evolution simulation.
//!
//! Everything that crosses a crate boundary lives here: the engine in
//! `contact-core` produces these values and the renderers in
//! `contact-render` consume them. All types are plain values with explicit
//! copy/clone semantics; nothing here holds shared mutable state.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrapper for contacts
//! - [`contact`] -- The [`Contact`] particle record
//! - [`snapshot`] -- Immutable per-step [`Snapshot`] and the simulation [`Bounds`]

pub mod contact;
pub mod ids;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use contact::Contact;
pub use ids::ContactId;
pub use snapshot::{Bounds, Snapshot};

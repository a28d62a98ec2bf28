//! The [`Contact`] particle record.

use serde::{Deserialize, Serialize};

use crate::ids::ContactId;

/// A single point particle in the evolution simulation.
///
/// A contact is a plain value: copying it yields a fully independent record.
/// The engine owns its working copies exclusively and hands out copies in
/// every [`Snapshot`](crate::Snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Identifier, unique within one simulation.
    pub id: ContactId,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Horizontal velocity.
    pub vx: f64,
    /// Vertical velocity.
    pub vy: f64,
    /// Scales the pairwise force. The factory draws it from `[0.4, 1.0)`.
    pub affinity: f64,
}

impl Contact {
    /// Create a contact from its raw components.
    pub const fn new(id: ContactId, x: f64, y: f64, vx: f64, vy: f64, affinity: f64) -> Self {
        Self {
            id,
            x,
            y,
            vx,
            vy,
            affinity,
        }
    }

    /// Euclidean speed `sqrt(vx^2 + vy^2)`.
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

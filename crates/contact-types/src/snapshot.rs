//! Immutable per-step snapshots and the simulation bounds.

use serde::{Deserialize, Serialize};

use crate::contact::Contact;

/// Width and height of the simulation area.
///
/// Positions are kept within `[0, width] x [0, height]`. Validation of the
/// dimensions happens where bounds are consumed (the engine), not here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Maximum horizontal position.
    pub width: f64,
    /// Maximum vertical position.
    pub height: f64,
}

impl Bounds {
    /// Create bounds from explicit dimensions.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `(x, y)` lies inside the closed rectangle.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// State of the simulation at one point in time.
///
/// Produced once per engine step and never mutated afterwards; the fields
/// are private and only readable through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    time: f64,
    contacts: Vec<Contact>,
    energy: f64,
}

impl Snapshot {
    /// Capture a snapshot. Energy is derived from the contacts as the sum of
    /// their speeds (total speed, not kinetic energy).
    pub fn capture(time: f64, contacts: Vec<Contact>) -> Self {
        let energy = contacts.iter().map(Contact::speed).sum();
        Self {
            time,
            contacts,
            energy,
        }
    }

    /// Simulation time after the step that produced this snapshot.
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Contacts in creation order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Sum of contact speeds.
    pub const fn energy(&self) -> f64 {
        self.energy
    }

    /// Number of contacts captured.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the snapshot holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

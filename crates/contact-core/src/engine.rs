//! The evolution engine: pairwise forces, integration, and wall reflection.
//!
//! Each call to [`EvolutionSimulation::step`] runs one fixed-timestep update:
//!
//! 1. **Forces** -- every unordered pair `(i, j)` contributes equal and
//!    opposite forces, accumulated into a per-contact buffer in a fixed pair
//!    order.
//! 2. **Integration** -- `v = (v + f * dt) * damping`, then `p += v * dt`.
//! 3. **Reflection** -- positions outside the bounds are clamped to the wall
//!    and the velocity on that axis is turned back inward.
//! 4. **Snapshot** -- time advances by `dt` and an immutable [`Snapshot`]
//!    is returned.
//!
//! # Force model
//!
//! Pair affinity is the mean of the two affinities and the influence is
//! `affinity / distance^2`, directed along the displacement. Below
//! [`REPULSION_RADIUS`] the influence is multiplied by [`REPULSION_FACTOR`],
//! which turns attraction into a stronger repulsion. Contacts therefore
//! settle into orbit-like motion instead of collapsing onto each other.
//!
//! # Determinism
//!
//! Stepping never consults a random source. Given the same contacts,
//! bounds, damping and `dt`, the resulting snapshots are bit-identical.

use contact_types::{Bounds, Contact, Snapshot};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::debug;

use crate::error::SimError;
use crate::factory::create_contacts_with;

/// Default per-step velocity damping.
pub const DEFAULT_DAMPING: f64 = 0.98;

/// Added to every pair distance so coincident contacts never divide by zero.
pub const SOFTENING: f64 = 1e-6;

/// Pair distance below which the force turns repulsive.
pub const REPULSION_RADIUS: f64 = 0.2;

/// Multiplier applied to the influence inside [`REPULSION_RADIUS`].
pub const REPULSION_FACTOR: f64 = -1.5;

/// Simulation state: a fixed set of contacts evolving under pairwise forces.
#[derive(Debug, Clone)]
pub struct EvolutionSimulation {
    /// Working copies of the contacts, in creation order.
    contacts: Vec<Contact>,
    /// Force accumulator, one entry per contact. Zeroed at every step.
    forces: Vec<(f64, f64)>,
    bounds: Bounds,
    damping: f64,
    /// Elapsed simulation time.
    time: f64,
}

impl EvolutionSimulation {
    /// Create a simulation from copies of `contacts`.
    ///
    /// The caller's slice is never touched again; the engine steps its own
    /// copies. Time starts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidInput`] if either bound is not a finite
    /// positive number, or if `damping` is not in `(0, 1]`.
    pub fn new(contacts: &[Contact], bounds: Bounds, damping: f64) -> Result<Self, SimError> {
        validate_bounds(bounds)?;
        validate_damping(damping)?;
        Ok(Self {
            contacts: contacts.to_vec(),
            forces: vec![(0.0, 0.0); contacts.len()],
            bounds,
            damping,
            time: 0.0,
        })
    }

    /// Create a simulation over unit bounds with [`DEFAULT_DAMPING`].
    ///
    /// # Errors
    ///
    /// Never fails for the default parameters; the `Result` mirrors
    /// [`EvolutionSimulation::new`].
    pub fn with_defaults(contacts: &[Contact]) -> Result<Self, SimError> {
        Self::new(contacts, Bounds::default(), DEFAULT_DAMPING)
    }

    /// Create a simulation whose contacts come from its own seeded random
    /// source. The source is used only here; stepping stays deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidInput`] for an oversized `count` or for the
    /// same bound and damping violations as [`EvolutionSimulation::new`].
    pub fn seeded(
        count: usize,
        seed: u64,
        bounds: Bounds,
        damping: f64,
    ) -> Result<Self, SimError> {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let contacts = create_contacts_with(count, &mut rng)?;
        Self::new(&contacts, bounds, damping)
    }

    /// Elapsed simulation time.
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Current contacts, in creation order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The simulation area.
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Per-step velocity damping.
    pub const fn damping(&self) -> f64 {
        self.damping
    }

    /// Number of contacts. Fixed for the lifetime of the simulation.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the simulation has no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Advance the simulation by exactly `dt` and return the new state.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidInput`] if `dt` is not a finite positive
    /// number. The state is left unchanged in that case.
    pub fn step(&mut self, dt: f64) -> Result<Snapshot, SimError> {
        validate_dt(dt)?;

        self.accumulate_forces();

        let Bounds { width, height } = self.bounds;
        for (contact, &(fx, fy)) in self.contacts.iter_mut().zip(&self.forces) {
            contact.vx = (contact.vx + fx * dt) * self.damping;
            contact.vy = (contact.vy + fy * dt) * self.damping;
            contact.x += contact.vx * dt;
            contact.y += contact.vy * dt;
            (contact.x, contact.vx) = reflect(contact.x, contact.vx, width);
            (contact.y, contact.vy) = reflect(contact.y, contact.vy, height);
        }

        self.time += dt;
        let snapshot = Snapshot::capture(self.time, self.contacts.clone());
        debug!(
            time = snapshot.time(),
            energy = snapshot.energy(),
            contacts = snapshot.len(),
            "Step complete"
        );
        Ok(snapshot)
    }

    /// Reset the accumulator and add every pair's contribution in `(i, j)`,
    /// `i < j` order.
    fn accumulate_forces(&mut self) {
        self.forces.fill((0.0, 0.0));
        for (i, contact) in self.contacts.iter().enumerate() {
            for (j, other) in self.contacts.iter().enumerate().skip(i.saturating_add(1)) {
                let (fx, fy) = pair_force(contact, other);
                if let Some(force) = self.forces.get_mut(i) {
                    force.0 += fx;
                    force.1 += fy;
                }
                if let Some(force) = self.forces.get_mut(j) {
                    force.0 -= fx;
                    force.1 -= fy;
                }
            }
        }
    }
}

/// Force exerted on `contact` by `other`. The force on `other` is the
/// negation.
///
/// Positive influence pulls `contact` toward `other`; inside
/// [`REPULSION_RADIUS`] the sign flips and the pair pushes apart.
pub fn pair_force(contact: &Contact, other: &Contact) -> (f64, f64) {
    let dx = other.x - contact.x;
    let dy = other.y - contact.y;
    let distance = dx.hypot(dy) + SOFTENING;
    let direction_x = dx / distance;
    let direction_y = dy / distance;

    let affinity = (contact.affinity + other.affinity) * 0.5;
    let mut influence = affinity / (distance * distance);
    if distance < REPULSION_RADIUS {
        influence *= REPULSION_FACTOR;
    }

    (direction_x * influence, direction_y * influence)
}

/// Reflect a single axis off the walls at `0` and `max_value`.
///
/// Returns the clamped position and the velocity pointing back inside.
pub fn reflect(position: f64, velocity: f64, max_value: f64) -> (f64, f64) {
    if position < 0.0 {
        (0.0, velocity.abs())
    } else if position > max_value {
        (max_value, -velocity.abs())
    } else {
        (position, velocity)
    }
}

pub(crate) fn validate_dt(dt: f64) -> Result<(), SimError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(SimError::invalid(format!("dt must be a finite positive number, got {dt}")))
    }
}

pub(crate) fn validate_bounds(bounds: Bounds) -> Result<(), SimError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if valid(bounds.width) && valid(bounds.height) {
        Ok(())
    } else {
        Err(SimError::invalid(format!(
            "bounds must be finite and positive, got {} x {}",
            bounds.width, bounds.height
        )))
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<(), SimError> {
    if damping > 0.0 && damping <= 1.0 {
        Ok(())
    } else {
        Err(SimError::invalid(format!("damping must be in (0, 1], got {damping}")))
    }
}

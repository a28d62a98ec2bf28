//! Seeded creation of randomized initial contacts.
//!
//! # Determinism
//!
//! Contacts are drawn from [`ChaChaRng`] (`ChaCha20`) seeded with
//! `seed_from_u64`. Unlike `StdRng`, the algorithm is fixed, so the same
//! `(count, seed)` pair yields the same contacts on every platform and
//! every release. Each contact consumes five draws in a fixed order:
//! `x`, `y`, `vx`, `vy`, `affinity`.

use contact_types::{Contact, ContactId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::debug;

use crate::error::SimError;

/// Half-width of the initial velocity range on each axis.
const INITIAL_SPEED_RANGE: f64 = 0.05;

/// Lowest affinity the factory produces.
const MIN_AFFINITY: f64 = 0.4;

/// Upper (exclusive) affinity bound.
const MAX_AFFINITY: f64 = 1.0;

/// Create `count` contacts from a seeded random stream.
///
/// Positions are uniform in `[0, 1) x [0, 1)`, velocities uniform in
/// `[-0.05, 0.05)` per axis and affinity uniform in `[0.4, 1.0)`. A count of
/// zero yields an empty vector.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if `count` does not fit a
/// [`ContactId`].
pub fn create_contacts(count: usize, seed: u64) -> Result<Vec<Contact>, SimError> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let contacts = create_contacts_with(count, &mut rng)?;
    debug!(count, seed, "Contacts created");
    Ok(contacts)
}

/// Create `count` contacts drawing from an existing random source.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if `count` does not fit a
/// [`ContactId`].
pub fn create_contacts_with(count: usize, rng: &mut impl Rng) -> Result<Vec<Contact>, SimError> {
    let count = u32::try_from(count).map_err(|_err| {
        SimError::invalid(format!("contact count {count} exceeds the identifier range"))
    })?;

    let contacts = (0..count)
        .map(|id| {
            let x = rng.random::<f64>();
            let y = rng.random::<f64>();
            let vx = rng.random_range(-INITIAL_SPEED_RANGE..INITIAL_SPEED_RANGE);
            let vy = rng.random_range(-INITIAL_SPEED_RANGE..INITIAL_SPEED_RANGE);
            let affinity = rng.random_range(MIN_AFFINITY..MAX_AFFINITY);
            Contact::new(ContactId(id), x, y, vx, vy, affinity)
        })
        .collect();
    Ok(contacts)
}

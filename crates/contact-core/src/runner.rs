//! Fixed-length simulation runs.
//!
//! [`run_simulation`] builds one [`EvolutionSimulation`] and steps it a fixed
//! number of times, collecting every snapshot in call order. All parameters
//! are validated before the first step, so a bad `dt` fails fast even when
//! no steps are requested.

use contact_types::{Bounds, Contact, Snapshot};
use tracing::info;

use crate::engine::{EvolutionSimulation, validate_dt};
use crate::error::SimError;

/// Run `steps` fixed-timestep updates over copies of `contacts`.
///
/// Returns one snapshot per step, in order. `steps = 0` returns an empty
/// vector.
///
/// # Errors
///
/// Returns [`SimError::InvalidInput`] if `dt`, `bounds` or `damping` are
/// invalid (see [`EvolutionSimulation::new`] and
/// [`EvolutionSimulation::step`]).
pub fn run_simulation(
    steps: usize,
    dt: f64,
    contacts: &[Contact],
    bounds: Bounds,
    damping: f64,
) -> Result<Vec<Snapshot>, SimError> {
    validate_dt(dt)?;
    let mut simulation = EvolutionSimulation::new(contacts, bounds, damping)?;

    info!(
        steps,
        dt,
        contacts = contacts.len(),
        width = bounds.width,
        height = bounds.height,
        damping,
        "Simulation starting"
    );

    let mut snapshots = Vec::with_capacity(steps);
    for _ in 0..steps {
        snapshots.push(simulation.step(dt)?);
    }

    info!(
        snapshots = snapshots.len(),
        final_time = simulation.time(),
        final_energy = snapshots.last().map_or(0.0, Snapshot::energy),
        "Simulation complete"
    );
    Ok(snapshots)
}

//! Contact factory, evolution engine, and simulation runner.
//!
//! This crate owns the physics: a fixed set of contacts attract each other
//! at long range and repel at short range, integrated with a fixed timestep
//! and reflected off the walls of the simulation area.
//!
//! # Modules
//!
//! - [`error`] -- [`SimError`] for invalid simulation input.
//! - [`factory`] -- Seeded creation of randomized initial contacts.
//! - [`engine`] -- [`EvolutionSimulation`], the stepping integrator.
//! - [`runner`] -- [`run_simulation`], drives the engine for N steps.
//! - [`config`] -- YAML configuration for a full run.

pub mod config;
pub mod engine;
pub mod error;
pub mod factory;
pub mod runner;

pub use config::{ConfigError, EvolutionConfig};
pub use engine::{DEFAULT_DAMPING, EvolutionSimulation};
pub use error::SimError;
pub use factory::create_contacts;
pub use runner::run_simulation;

//! Simulation engine for RAMPART.
//!
//! Owns the hecs ECS world, runs per-frame and per-combat-tick systems,
//! and produces `SessionSnapshot`s for the host. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod ledger;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use engine::{Session, SessionConfig};
pub use rampart_core as core;

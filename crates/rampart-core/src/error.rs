//! Error taxonomy.
//!
//! `ValidationError` rejects malformed values at construction time.
//! `InvariantViolation` reports internal consistency failures that are
//! fatal to the current session; the engine responds by discarding the
//! world and returning to the menu rather than continuing with
//! corrupted state. There are no recoverable errors in this core — it
//! performs no I/O, and numeric underflow clamps silently.

use thiserror::Error;

/// Malformed input rejected at construction. The offending entity (or
/// session) is never created.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("rectangle dimensions must be non-negative (w={w}, h={h})")]
    Geometry { w: f64, h: f64 },
    #[error("mover speed must be finite and non-negative (speed={speed})")]
    MoverSpeed { speed: f64 },
    #[error("hit points must be finite and non-negative (hp={hp})")]
    HitPoints { hp: f64 },
    #[error("damage per tick must be finite and non-negative (damage_per_tick={damage_per_tick})")]
    Damage { damage_per_tick: f64 },
    #[error("range threshold must be finite (threshold_x={threshold_x})")]
    Threshold { threshold_x: f64 },
}

/// Internal consistency failure. Fatal to the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("mover {spawn_order} has a non-finite position")]
    NonFinitePosition { spawn_order: u64 },
}

//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state).
///
/// The only valid transitions are `Menu -> Playing` (start signal),
/// `Playing -> Defeated` (player health reaches zero), and
/// `Defeated -> Menu` (restart signal). An invariant violation while
/// Playing aborts straight back to `Menu`. Anything else is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    Defeated,
}

/// Mover archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoverClass {
    /// Fast and fragile.
    Dart,
    /// Moderate speed, moderate hp.
    Glider,
    /// Slow and heavily armored.
    Freighter,
}

impl MoverClass {
    /// Traversal speed in field units per nominal tick.
    pub fn speed(self) -> f64 {
        use crate::constants::*;
        match self {
            MoverClass::Dart => DART_SPEED,
            MoverClass::Glider => GLIDER_SPEED,
            MoverClass::Freighter => FREIGHTER_SPEED,
        }
    }

    /// Hit points at spawn.
    pub fn hp(self) -> f64 {
        use crate::constants::*;
        match self {
            MoverClass::Dart => DART_HP,
            MoverClass::Glider => GLIDER_HP,
            MoverClass::Freighter => FREIGHTER_HP,
        }
    }

    /// Currency credited when a mover of this class is destroyed.
    pub fn bounty(self) -> u32 {
        use crate::constants::*;
        match self {
            MoverClass::Dart => DART_BOUNTY,
            MoverClass::Glider => GLIDER_BOUNTY,
            MoverClass::Freighter => FREIGHTER_BOUNTY,
        }
    }
}

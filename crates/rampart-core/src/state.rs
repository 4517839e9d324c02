//! Session snapshot — the complete visible state handed to the
//! renderer after each tick.
//!
//! The renderer and asset loader consume this and produce nothing back
//! into the core.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::components::PointerState;
use crate::enums::{MoverClass, Phase};
use crate::events::SessionEvent;
use crate::types::{Rect, SimTime};

/// Complete read-only view of the session after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub time: SimTime,
    /// Movers in spawn order.
    pub movers: Vec<MoverView>,
    /// Emplacements in spawn order.
    pub emplacements: Vec<EmplacementView>,
    pub ledger: LedgerView,
    pub pointer: PointerState,
    /// Events since the previous snapshot.
    pub events: Vec<SessionEvent>,
}

/// A visible mover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoverView {
    pub spawn_order: u64,
    pub class: MoverClass,
    pub rect: Rect,
    pub center: DVec2,
    /// Remaining hp as a fraction of max, for health bars.
    pub hp_fraction: f64,
}

/// A visible emplacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmplacementView {
    pub spawn_order: u64,
    pub rect: Rect,
    pub damage_per_tick: f64,
    pub threshold_x: f64,
    /// Whether any mover was in range at the last combat tick, for
    /// firing animations.
    pub firing: bool,
}

/// Player resources.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LedgerView {
    pub player_health: u32,
    pub currency: u32,
}

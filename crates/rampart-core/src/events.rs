//! Events emitted by the simulation for the host to surface.
//!
//! Events accumulate during ticks and are drained into each snapshot.
//! This is the core's whole observability surface; the host decides
//! whether they become UI, audio, or log lines.

use serde::{Deserialize, Serialize};

use crate::enums::MoverClass;

/// One entity-lifecycle or session-lifecycle occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// A mover was destroyed by emplacement fire.
    MoverKilled {
        spawn_order: u64,
        class: MoverClass,
        bounty: u32,
    },
    /// A mover crossed the far field boundary alive.
    MoverEscaped { spawn_order: u64, class: MoverClass },
    /// Player health reached zero; the session is over.
    Defeated,
    /// An internal invariant was violated; the session was discarded.
    SessionAborted { reason: String },
}

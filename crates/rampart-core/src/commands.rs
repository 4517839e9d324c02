//! Session commands sent from the host to the simulation.
//!
//! These are the external start/restart trigger signals. They are
//! queued and processed at the next render-tick boundary, so a command
//! never mutates the session mid-tick.

use serde::{Deserialize, Serialize};

/// All possible host trigger signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionCommand {
    /// Begin a playthrough. Valid only in `Menu`; builds a fresh world.
    Start,
    /// Discard the finished playthrough. Valid only in `Defeated`;
    /// nothing carries over into the next session.
    Restart,
}

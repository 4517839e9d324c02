//! Shared state between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use rampart_core::commands::SessionCommand;
use rampart_core::state::SessionSnapshot;

/// Commands accepted by the game loop thread.
///
/// Pointer events may arrive at any time; the loop coalesces them into
/// one input sample per frame, so the session only ever reads a stable
/// snapshot of the pointer at the start of a render tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// Forwarded to the session's command queue (start/restart).
    Session(SessionCommand),
    /// Pointer moved to a new position.
    PointerMoved { x: f64, y: f64 },
    /// Primary button pressed.
    PointerDown,
    /// Primary button released.
    PointerUp,
    /// Stop the loop thread.
    Shutdown,
}

/// Latest snapshot slot, written by the loop and polled by the host.
pub type SharedSnapshot = Arc<Mutex<Option<SessionSnapshot>>>;

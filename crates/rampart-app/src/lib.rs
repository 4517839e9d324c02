//! Host-side scheduler for RAMPART.
//!
//! Runs the session on a loop thread that owns both cadences: the
//! per-frame render tick and the fixed-interval combat tick. The host
//! talks to the loop over an mpsc channel and polls the latest
//! snapshot from a shared slot.

pub mod game_loop;
pub mod state;

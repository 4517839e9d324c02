//! Systems that operate on the session world.
//!
//! `movement` and `reconcile` run once per render tick, `combat` once
//! per combat tick, `snapshot` whenever the host wants a view. Systems
//! take `&mut World` (or `&World` for read-only) and own no state.

pub mod combat;
pub mod movement;
pub mod reconcile;
pub mod snapshot;

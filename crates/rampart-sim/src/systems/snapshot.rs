//! Snapshot system: queries the world and builds a complete
//! `SessionSnapshot`. Read-only — it never modifies the world.

use hecs::World;

use rampart_core::components::{Emplacement, FiringState, Health, Mover, PointerState, SpawnOrder};
use rampart_core::enums::Phase;
use rampart_core::events::SessionEvent;
use rampart_core::state::{EmplacementView, MoverView, SessionSnapshot};
use rampart_core::types::{Rect, SimTime};

use crate::ledger::ResourceLedger;

/// Build a complete snapshot of the current session state.
pub fn build(
    world: &World,
    phase: Phase,
    time: SimTime,
    ledger: &ResourceLedger,
    pointer: PointerState,
    events: Vec<SessionEvent>,
) -> SessionSnapshot {
    SessionSnapshot {
        phase,
        time,
        movers: build_movers(world),
        emplacements: build_emplacements(world),
        ledger: ledger.view(),
        pointer,
        events,
    }
}

fn build_movers(world: &World) -> Vec<MoverView> {
    let mut movers: Vec<MoverView> = world
        .query::<(&Mover, &Health, &Rect, &SpawnOrder)>()
        .iter()
        .map(|(_, (mover, health, rect, order))| MoverView {
            spawn_order: order.0,
            class: mover.class,
            rect: *rect,
            center: rect.center(),
            hp_fraction: health.fraction(),
        })
        .collect();

    movers.sort_by_key(|m| m.spawn_order);
    movers
}

fn build_emplacements(world: &World) -> Vec<EmplacementView> {
    let mut emplacements: Vec<EmplacementView> = world
        .query::<(&Emplacement, &FiringState, &Rect, &SpawnOrder)>()
        .iter()
        .map(|(_, (emplacement, firing, rect, order))| EmplacementView {
            spawn_order: order.0,
            rect: *rect,
            damage_per_tick: emplacement.damage_per_tick,
            threshold_x: emplacement.threshold_x,
            firing: firing.0,
        })
        .collect();

    emplacements.sort_by_key(|e| e.spawn_order);
    emplacements
}

//! Combat resolver — runs once per combat tick, never per frame.
//!
//! For each emplacement, every mover whose center has passed the
//! emplacement's axis threshold takes `damage_per_tick`. Both loops
//! iterate in spawn order, so simultaneous lethal damage from two
//! emplacements resolves identically on every run. The resolver only
//! clamps hp; despawning dead movers is reconciliation's job, so the
//! collections are never mutated while iterated.

use hecs::{Entity, World};

use rampart_core::components::{Emplacement, FiringState, Health, Mover, SpawnOrder};
use rampart_core::types::Rect;

/// Apply one combat tick of damage across the world.
pub fn run(world: &mut World) {
    let mut emplacements: Vec<(Entity, SpawnOrder, Emplacement)> = world
        .query::<(&Emplacement, &SpawnOrder)>()
        .iter()
        .map(|(entity, (emplacement, order))| (entity, *order, *emplacement))
        .collect();
    emplacements.sort_by_key(|(_, order, _)| *order);

    let mut movers: Vec<(Entity, SpawnOrder, f64)> = world
        .query::<(&Mover, &Rect, &SpawnOrder)>()
        .iter()
        .map(|(entity, (_, rect, order))| (entity, *order, rect.center().x))
        .collect();
    movers.sort_by_key(|(_, order, _)| *order);

    for (emplacement_entity, _, emplacement) in &emplacements {
        let mut fired = false;

        for (mover_entity, _, center_x) in &movers {
            if !emplacement.is_in_range(*center_x) {
                continue;
            }
            match world.get::<&mut Health>(*mover_entity) {
                Ok(mut health) => {
                    health.apply_damage(emplacement.damage_per_tick);
                    fired = true;
                }
                // Movers are collected and damaged within one single-
                // threaded sweep, so the entity cannot have despawned.
                Err(_) => debug_assert!(false, "mover despawned mid-sweep"),
            }
        }

        if let Ok(mut firing) = world.get::<&mut FiringState>(*emplacement_entity) {
            firing.0 = fired;
        }
    }
}

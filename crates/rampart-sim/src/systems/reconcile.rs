//! Lifecycle reconciliation — runs once per render tick, after movement.
//!
//! Walks movers in spawn order and resolves removals against the
//! ledger: a dead mover is a kill (bounty credited), a live mover past
//! the far boundary is an escape (health debited). The hp check comes
//! first, so a mover killed at the boundary counts as a kill and
//! overkill credits exactly one bounty. Removals and despawns go
//! through scratch buffers owned by the engine, so the world is never
//! mutated while iterated and steady-state ticks allocate nothing.

use hecs::{Entity, World};

use rampart_core::components::{Health, Mover, SpawnOrder};
use rampart_core::constants::FIELD_WIDTH;
use rampart_core::error::InvariantViolation;
use rampart_core::events::SessionEvent;
use rampart_core::types::Rect;

use crate::ledger::ResourceLedger;

/// Scratch space for one reconciliation sweep, owned by the engine and
/// reused every tick so steady-state frames do not allocate.
#[derive(Default)]
pub struct ReconcileBuffers {
    removals: Vec<(Entity, SpawnOrder, Removal)>,
    despawns: Vec<Entity>,
}

/// Sweep the world for dead and escaped movers, settle the ledger, and
/// emit lifecycle events. Returns an `InvariantViolation` if a mover's
/// position has become non-finite; the caller aborts the session.
pub fn run(
    world: &mut World,
    ledger: &mut ResourceLedger,
    buffers: &mut ReconcileBuffers,
    events: &mut Vec<SessionEvent>,
) -> Result<(), InvariantViolation> {
    buffers.removals.clear();
    buffers.despawns.clear();

    for (entity, (mover, health, rect, order)) in
        world.query_mut::<(&Mover, &Health, &Rect, &SpawnOrder)>()
    {
        if rect.is_degenerate() {
            return Err(InvariantViolation::NonFinitePosition {
                spawn_order: order.0,
            });
        }
        if health.is_dead() {
            buffers.removals.push((entity, *order, Removal::Kill(mover.class)));
        } else if rect.x() >= FIELD_WIDTH {
            buffers
                .removals
                .push((entity, *order, Removal::Escape(mover.class)));
        }
    }

    // Spawn order decides event order when several movers leave in the
    // same tick.
    buffers.removals.sort_by_key(|(_, order, _)| *order);

    for (entity, order, removal) in buffers.removals.drain(..) {
        match removal {
            Removal::Kill(class) => {
                let bounty = class.bounty();
                ledger.on_kill(bounty);
                events.push(SessionEvent::MoverKilled {
                    spawn_order: order.0,
                    class,
                    bounty,
                });
            }
            Removal::Escape(class) => {
                ledger.on_escape();
                events.push(SessionEvent::MoverEscaped {
                    spawn_order: order.0,
                    class,
                });
            }
        }
        buffers.despawns.push(entity);
    }

    for entity in buffers.despawns.drain(..) {
        let _ = world.despawn(entity);
    }

    Ok(())
}

enum Removal {
    Kill(rampart_core::enums::MoverClass),
    Escape(rampart_core::enums::MoverClass),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::constants::{DART_BOUNTY, INITIAL_CURRENCY, INITIAL_PLAYER_HEALTH};
    use rampart_core::enums::MoverClass;

    fn spawn_mover(world: &mut World, order: u64, x: f64, hp: f64, dmg_taken: f64) -> Entity {
        let mover = Mover::of_class(MoverClass::Dart).unwrap();
        let mut health = Health::new(hp).unwrap();
        health.apply_damage(dmg_taken);
        let rect = Rect::new(x, 0.0, 50.0, 50.0).unwrap();
        world.spawn((mover, health, rect, SpawnOrder(order)))
    }

    #[test]
    fn dead_mover_is_removed_and_credited_once() {
        let mut world = World::new();
        let mut ledger = ResourceLedger::default();
        let mut buffers = ReconcileBuffers::default();
        let mut events = Vec::new();

        let dead = spawn_mover(&mut world, 0, 300.0, 10.0, 15.0);

        run(&mut world, &mut ledger, &mut buffers, &mut events).unwrap();

        assert!(!world.contains(dead));
        assert_eq!(ledger.currency(), INITIAL_CURRENCY + DART_BOUNTY);
        assert_eq!(ledger.player_health(), INITIAL_PLAYER_HEALTH);
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            SessionEvent::MoverKilled { spawn_order: 0, .. }
        ));
    }

    #[test]
    fn escaped_mover_costs_one_health() {
        let mut world = World::new();
        let mut ledger = ResourceLedger::default();
        let mut buffers = ReconcileBuffers::default();
        let mut events = Vec::new();

        let escaped = spawn_mover(&mut world, 0, FIELD_WIDTH + 1.0, 40.0, 0.0);

        run(&mut world, &mut ledger, &mut buffers, &mut events).unwrap();

        assert!(!world.contains(escaped));
        assert_eq!(ledger.player_health(), INITIAL_PLAYER_HEALTH - 1);
        assert_eq!(ledger.currency(), INITIAL_CURRENCY, "escapes pay nothing");
        assert!(matches!(events[0], SessionEvent::MoverEscaped { .. }));
    }

    #[test]
    fn dead_at_boundary_counts_as_kill_not_escape() {
        let mut world = World::new();
        let mut ledger = ResourceLedger::default();
        let mut buffers = ReconcileBuffers::default();
        let mut events = Vec::new();

        let _m = spawn_mover(&mut world, 0, FIELD_WIDTH + 10.0, 10.0, 10.0);

        run(&mut world, &mut ledger, &mut buffers, &mut events).unwrap();

        assert_eq!(ledger.player_health(), INITIAL_PLAYER_HEALTH);
        assert_eq!(ledger.currency(), INITIAL_CURRENCY + DART_BOUNTY);
        assert!(matches!(events[0], SessionEvent::MoverKilled { .. }));
    }

    #[test]
    fn simultaneous_removals_emit_in_spawn_order() {
        let mut world = World::new();
        let mut ledger = ResourceLedger::default();
        let mut buffers = ReconcileBuffers::default();
        let mut events = Vec::new();

        // Spawn out of order to make sure sorting does the work.
        let _b = spawn_mover(&mut world, 4, 300.0, 10.0, 10.0);
        let _a = spawn_mover(&mut world, 1, FIELD_WIDTH + 5.0, 40.0, 0.0);

        run(&mut world, &mut ledger, &mut buffers, &mut events).unwrap();

        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            SessionEvent::MoverEscaped { spawn_order: 1, .. }
        ));
        assert!(matches!(
            events[1],
            SessionEvent::MoverKilled { spawn_order: 4, .. }
        ));
    }

    #[test]
    fn scratch_buffers_are_reused_across_ticks() {
        let mut world = World::new();
        let mut ledger = ResourceLedger::default();
        let mut buffers = ReconcileBuffers::default();
        let mut events = Vec::new();

        let _first = spawn_mover(&mut world, 0, 300.0, 10.0, 10.0);
        run(&mut world, &mut ledger, &mut buffers, &mut events).unwrap();
        assert_eq!(events.len(), 1);

        // The scratch space is drained but its allocation is kept.
        assert!(buffers.removals.is_empty());
        assert!(buffers.despawns.is_empty());
        let removal_cap = buffers.removals.capacity();
        let despawn_cap = buffers.despawns.capacity();
        assert!(removal_cap >= 1);
        assert!(despawn_cap >= 1);

        // A second sweep through the same buffers settles cleanly and
        // allocates nothing new.
        let _second = spawn_mover(&mut world, 1, 300.0, 10.0, 10.0);
        run(&mut world, &mut ledger, &mut buffers, &mut events).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(ledger.currency(), INITIAL_CURRENCY + 2 * DART_BOUNTY);
        assert_eq!(buffers.removals.capacity(), removal_cap);
        assert_eq!(buffers.despawns.capacity(), despawn_cap);
    }

    #[test]
    fn non_finite_position_is_an_invariant_violation() {
        let mut world = World::new();
        let mut ledger = ResourceLedger::default();
        let mut buffers = ReconcileBuffers::default();
        let mut events = Vec::new();

        let mover = Mover::of_class(MoverClass::Dart).unwrap();
        let health = Health::new(40.0).unwrap();
        let mut rect = Rect::new(0.0, 0.0, 50.0, 50.0).unwrap();
        rect.translate(f64::NAN, 0.0);
        let _m = world.spawn((mover, health, rect, SpawnOrder(9)));

        let err = run(&mut world, &mut ledger, &mut buffers, &mut events).unwrap_err();
        assert_eq!(err, InvariantViolation::NonFinitePosition { spawn_order: 9 });
    }
}

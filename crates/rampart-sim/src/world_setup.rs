//! Entity spawn factories for setting up a session's world.
//!
//! All spawn paths validate through the component constructors, so a
//! malformed value is rejected before the entity exists.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use rampart_core::components::{Emplacement, FiringState, Health, Mover, SpawnOrder};
use rampart_core::constants::*;
use rampart_core::enums::MoverClass;
use rampart_core::error::ValidationError;
use rampart_core::types::Rect;

/// Set up the initial session world: a staggered column of inbound
/// movers off the left edge and a line of emplacements across the field.
pub fn setup_session(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_spawn_order: &mut u64,
) -> Result<(), ValidationError> {
    let base_y = FIELD_HEIGHT / 3.5;

    for i in 0..SCENARIO_MOVER_COUNT {
        let class = match i % 5 {
            3 => MoverClass::Glider,
            4 => MoverClass::Freighter,
            _ => MoverClass::Dart,
        };
        let x = -(i as f64) * SCENARIO_MOVER_SPACING + 100.0;
        let y = base_y + rng.gen_range(-SCENARIO_LANE_JITTER..SCENARIO_LANE_JITTER);
        let rect = Rect::new(x, y, MOVER_SIZE, MOVER_SIZE)?;
        let _ = spawn_mover(world, next_spawn_order, class, rect)?;
    }

    for i in 0..SCENARIO_EMPLACEMENT_COUNT {
        let x = SCENARIO_EMPLACEMENT_START_X + i as f64 * SCENARIO_EMPLACEMENT_SPACING;
        let rect = Rect::new(x, FIELD_HEIGHT / 2.0, EMPLACEMENT_SIZE, EMPLACEMENT_SIZE)?;
        let _ = spawn_emplacement(world, next_spawn_order, EMPLACEMENT_DAMAGE_PER_TICK, x, rect)?;
    }

    Ok(())
}

/// Spawn a single mover of the given class.
pub fn spawn_mover(
    world: &mut World,
    next_spawn_order: &mut u64,
    class: MoverClass,
    rect: Rect,
) -> Result<hecs::Entity, ValidationError> {
    let mover = Mover::of_class(class)?;
    let health = Health::new(class.hp())?;
    let order = SpawnOrder(*next_spawn_order);
    *next_spawn_order += 1;
    Ok(world.spawn((mover, health, rect, order)))
}

/// Spawn a single emplacement with an axis-threshold range at
/// `threshold_x`.
pub fn spawn_emplacement(
    world: &mut World,
    next_spawn_order: &mut u64,
    damage_per_tick: f64,
    threshold_x: f64,
    rect: Rect,
) -> Result<hecs::Entity, ValidationError> {
    let emplacement = Emplacement::new(damage_per_tick, threshold_x)?;
    let order = SpawnOrder(*next_spawn_order);
    *next_spawn_order += 1;
    Ok(world.spawn((emplacement, FiringState::default(), rect, order)))
}

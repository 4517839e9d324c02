//! Movement integration system.
//!
//! Advances each mover along the travel axis by `speed * dt`, where
//! `dt` is the measured frame time as a fraction of the nominal tick.
//! Scaling by elapsed time rather than tick count keeps effective
//! speed independent of display refresh rate.

use hecs::World;

use rampart_core::components::Mover;
use rampart_core::types::Rect;

/// Run movement integration for all movers.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (rect, mover)) in world.query_mut::<(&mut Rect, &Mover)>() {
        rect.translate(mover.speed * dt, 0.0);
    }
}

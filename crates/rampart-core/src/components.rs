//! ECS components for hecs entities.
//!
//! Components are plain data structs with small invariant-preserving
//! methods. Iteration and lifecycle logic lives in systems, not here.

use serde::{Deserialize, Serialize};

use crate::enums::MoverClass;
use crate::error::ValidationError;

/// An enemy unit advancing along the travel axis toward the escape
/// boundary. Speed is fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Mover {
    pub class: MoverClass,
    /// Field units advanced per nominal tick.
    pub speed: f64,
}

impl Mover {
    /// Create a mover of the given class, rejecting negative speed.
    pub fn of_class(class: MoverClass) -> Result<Self, ValidationError> {
        Self::with_speed(class, class.speed())
    }

    /// Create a mover with an explicit speed override.
    pub fn with_speed(class: MoverClass, speed: f64) -> Result<Self, ValidationError> {
        if speed < 0.0 || !speed.is_finite() {
            return Err(ValidationError::MoverSpeed { speed });
        }
        Ok(Self { class, speed })
    }
}

/// Hit points with a fixed maximum. `0 <= hp <= max_hp` always holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    hp: f64,
    max_hp: f64,
}

impl Health {
    pub fn new(max_hp: f64) -> Result<Self, ValidationError> {
        if max_hp < 0.0 || !max_hp.is_finite() {
            return Err(ValidationError::HitPoints { hp: max_hp });
        }
        Ok(Self {
            hp: max_hp,
            max_hp,
        })
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    /// Remaining hp as a fraction of the maximum, for health bars.
    pub fn fraction(&self) -> f64 {
        if self.max_hp == 0.0 {
            0.0
        } else {
            self.hp / self.max_hp
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// Reduce hp, clamping at zero. Removal is not this type's job.
    pub fn apply_damage(&mut self, amount: f64) {
        self.hp = (self.hp - amount).max(0.0);
    }
}

/// A stationary defense unit. Immutable after placement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Emplacement {
    /// Damage applied to each in-range mover per combat tick.
    pub damage_per_tick: f64,
    /// Travel-axis threshold: every mover whose center has passed this
    /// x coordinate is in range. This is the only range policy; radial
    /// distance is not used anywhere.
    pub threshold_x: f64,
}

impl Emplacement {
    pub fn new(damage_per_tick: f64, threshold_x: f64) -> Result<Self, ValidationError> {
        if damage_per_tick < 0.0 || !damage_per_tick.is_finite() {
            return Err(ValidationError::Damage { damage_per_tick });
        }
        if !threshold_x.is_finite() {
            return Err(ValidationError::Threshold { threshold_x });
        }
        Ok(Self {
            damage_per_tick,
            threshold_x,
        })
    }

    /// Axis-threshold range test against a mover's center x.
    pub fn is_in_range(&self, mover_center_x: f64) -> bool {
        mover_center_x >= self.threshold_x
    }
}

/// Monotonic spawn counter. The deterministic iteration key: combat
/// resolution and snapshots order entities by this, so simultaneous
/// lethal damage is reproducible across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// Whether an emplacement damaged at least one mover at the most
/// recent combat tick. Drives firing animation in the renderer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FiringState(pub bool);

/// Pointer state recorded at the start of the current render tick.
/// The simulation never writes back to the host's input; this is the
/// per-frame sample, surfaced in snapshots for the renderer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub down: bool,
    pub released: bool,
}

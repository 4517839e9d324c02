//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::NOMINAL_TICK_MS;
use crate::error::ValidationError;

/// Axis-aligned rectangle in field coordinates.
/// x grows toward the escape boundary (rightward), y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    /// Construct a rectangle, rejecting negative dimensions.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Result<Self, ValidationError> {
        if w < 0.0 || h < 0.0 {
            return Err(ValidationError::Geometry { w, h });
        }
        Ok(Self { x, y, w, h })
    }

    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }
    pub fn w(&self) -> f64 {
        self.w
    }
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Right edge (x + w).
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    /// Bottom edge (y + h).
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Center point.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Move the rectangle without resizing it.
    pub fn set_pos(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Shift the rectangle by a delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// AABB intersection test. Touching edges count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Point containment test, inclusive of edges.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// True if any coordinate or dimension is NaN or infinite.
    pub fn is_degenerate(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite())
    }
}

/// Host input sampled at the start of a render tick.
///
/// The simulation only reads this; pointer events delivered between ticks
/// are coalesced by the host into one sample per frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameInput {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub pointer_down: bool,
    pub pointer_released: bool,
    /// Measured wall-clock time since the previous render tick.
    pub elapsed_ms: f64,
}

impl FrameInput {
    /// An input sample with no pointer activity.
    pub fn idle(elapsed_ms: f64) -> Self {
        Self {
            pointer_x: 0.0,
            pointer_y: 0.0,
            pointer_down: false,
            pointer_released: false,
            elapsed_ms,
        }
    }

    /// Elapsed time expressed as a fraction of the nominal tick.
    /// Movement scales with this, so speed does not vary with frame rate.
    pub fn dt(&self) -> f64 {
        self.elapsed_ms / NOMINAL_TICK_MS
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Render ticks processed while Playing.
    pub frame: u64,
    /// Combat ticks processed while Playing.
    pub combat_tick: u64,
    /// Accumulated simulated time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Record one render tick of `elapsed_ms` wall-clock time.
    pub fn advance_frame(&mut self, elapsed_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += elapsed_ms;
    }

    /// Record one combat tick.
    pub fn advance_combat(&mut self) {
        self.combat_tick += 1;
    }
}

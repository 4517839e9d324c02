//! Fixed-cadence accumulator for the combat tick.
//!
//! The render tick runs once per display frame at whatever interval the
//! host measures; the combat tick fires on a fixed wall-clock interval
//! independent of frame rate. `FixedCadence` converts measured frame
//! time into a count of due fixed ticks, carrying the remainder between
//! frames. Both cadences execute on the same logical thread, so ticks
//! never overlap.

use rampart_core::constants::{COMBAT_INTERVAL_MS, MAX_CATCHUP_TICKS};

/// Accumulates elapsed time and reports how many fixed ticks are due.
#[derive(Debug, Clone)]
pub struct FixedCadence {
    interval_ms: f64,
    carry_ms: f64,
}

impl FixedCadence {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            carry_ms: 0.0,
        }
    }

    /// Cadence for the combat resolver sweep.
    pub fn combat() -> Self {
        Self::new(COMBAT_INTERVAL_MS)
    }

    /// Feed measured elapsed time; returns the number of fixed ticks
    /// now due. A backlog beyond `MAX_CATCHUP_TICKS` is discarded so a
    /// pathologically slow frame cannot trigger a catch-up spiral.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        self.carry_ms += elapsed_ms.max(0.0);

        let mut due = 0u32;
        while self.carry_ms >= self.interval_ms {
            self.carry_ms -= self.interval_ms;
            due += 1;
        }

        if due > MAX_CATCHUP_TICKS {
            // Too far behind — drop the excess and start fresh.
            self.carry_ms = 0.0;
            due = MAX_CATCHUP_TICKS;
        }
        due
    }

    /// Drop any accumulated carry, e.g. when a session (re)starts.
    pub fn reset(&mut self) {
        self.carry_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_remainder_between_frames() {
        let mut cadence = FixedCadence::new(750.0);
        assert_eq!(cadence.advance(500.0), 0);
        assert_eq!(cadence.advance(500.0), 1, "500 + 500 crosses 750 once");
        assert_eq!(cadence.advance(499.9), 0, "carry is 250, not reset");
        assert_eq!(cadence.advance(0.1), 1);
    }

    #[test]
    fn multiple_ticks_in_one_slow_frame() {
        let mut cadence = FixedCadence::new(750.0);
        assert_eq!(cadence.advance(2250.0), 3);
    }

    #[test]
    fn backlog_is_clamped() {
        let mut cadence = FixedCadence::new(750.0);
        let due = cadence.advance(750.0 * 100.0);
        assert_eq!(due, MAX_CATCHUP_TICKS);
        // Excess was discarded, not deferred.
        assert_eq!(cadence.advance(0.0), 0);
        assert_eq!(cadence.advance(749.9), 0);
    }

    #[test]
    fn negative_elapsed_is_ignored() {
        let mut cadence = FixedCadence::new(750.0);
        assert_eq!(cadence.advance(-100.0), 0);
        assert_eq!(cadence.advance(750.0), 1);
    }

    #[test]
    fn reset_drops_carry() {
        let mut cadence = FixedCadence::new(750.0);
        let _ = cadence.advance(700.0);
        cadence.reset();
        assert_eq!(cadence.advance(100.0), 0);
    }
}

//! Countdown timing constants
//!
//! All values are in milliseconds. The warning thresholds are compared with
//! strict equality on every tick, so every value here must stay a multiple of
//! the tick period or the warnings are silently skipped.

use std::time::Duration;

/// Timer resolution (one countdown tick)
pub const COUNTER_INTERVAL: i32 = 100;

/// Length of the first phase after `start()`
pub const INITIAL_COUNTER: i32 = 27_000;

/// Length of every phase after the first switch
pub const ROTATION_DURATION: i32 = 30_000;

/// One game tick, added to the counter by a trample
pub const ATTACK_DURATION: i32 = 600;

pub const TWO_SEC_WARNING: i32 = 2_000;
pub const ONE_SEC_WARNING: i32 = 1_000;

/// Added to the counter before display so the readout hits zero when the player must act
pub const DISPLAY_OFFSET: i32 = 1_000;

/// Tunable rotation timing. `Default` matches the in-game cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationTiming {
    pub counter_interval_ms: i32,
    pub initial_counter_ms: i32,
    pub rotation_duration_ms: i32,
    pub attack_duration_ms: i32,
    pub two_sec_warning_ms: i32,
    pub one_sec_warning_ms: i32,
    pub display_offset_ms: i32,
}

impl Default for RotationTiming {
    fn default() -> Self {
        Self {
            counter_interval_ms: COUNTER_INTERVAL,
            initial_counter_ms: INITIAL_COUNTER,
            rotation_duration_ms: ROTATION_DURATION,
            attack_duration_ms: ATTACK_DURATION,
            two_sec_warning_ms: TWO_SEC_WARNING,
            one_sec_warning_ms: ONE_SEC_WARNING,
            display_offset_ms: DISPLAY_OFFSET,
        }
    }
}

impl RotationTiming {
    /// Tick period as a `Duration` for the clock
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.counter_interval_ms.max(1) as u64)
    }

    /// Returns true if both warnings can be hit exactly by counting down
    /// from a phase start, with or without tramples.
    pub fn warnings_aligned(&self) -> bool {
        let step = self.counter_interval_ms;
        step > 0
            && [
                self.initial_counter_ms,
                self.rotation_duration_ms,
                self.attack_duration_ms,
                self.two_sec_warning_ms,
                self.one_sec_warning_ms,
            ]
            .iter()
            .all(|value| value % step == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timing_matches_game_cadence() {
        let timing = RotationTiming::default();
        assert_eq!(timing.counter_interval_ms, 100);
        assert_eq!(timing.initial_counter_ms, 27_000);
        assert_eq!(timing.rotation_duration_ms, 30_000);
        assert_eq!(timing.attack_duration_ms, 600);
        assert_eq!(timing.tick_period(), Duration::from_millis(100));
        assert!(timing.warnings_aligned());
    }

    #[test]
    fn misaligned_attack_duration_is_detected() {
        let timing = RotationTiming {
            attack_duration_ms: 650,
            ..Default::default()
        };
        assert!(!timing.warnings_aligned());
    }
}

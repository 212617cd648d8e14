//! Rotation timer
//!
//! This module provides:
//! - **Timing**: The countdown constants (tick period, phase lengths, cue thresholds)
//! - **Engine**: The countdown state machine that alternates the boss style
//! - **Events**: Audio cues produced by the engine
//!
//! # State Machine
//!
//! ```text
//! Idle --start()--> Active(Ranged)
//! Active(s) --tick at counter <= 0--> Active(opposite(s))
//! Active(s) --trample()--> Active(s)      (counter only)
//! Active(_) --reset()--> Idle
//! ```

mod engine;
mod event;
mod timing;


pub use engine::{EngineOutput, EngineState, RotationEngine};
pub use event::CueEvent;
pub use timing::{
    ATTACK_DURATION, COUNTER_INTERVAL, DISPLAY_OFFSET, INITIAL_COUNTER, ONE_SEC_WARNING,
    ROTATION_DURATION, RotationTiming, TWO_SEC_WARNING,
};

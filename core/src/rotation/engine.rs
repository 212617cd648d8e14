//! Rotation countdown state machine
//!
//! The engine owns the remaining-time counter and the current style. It never
//! talks to the view or the audio system itself: every operation returns an
//! [`EngineOutput`] describing what should be shown and heard, and the
//! controller forwards it to the right context.
//!
//! # Lifecycle
//!
//! 1. `start()` → Ranged, counter at the initial phase length
//! 2. `tick()` every 100 ms → counts down, warns at 2 s and 1 s
//! 3. Counter reaches zero → switch style, counter back to a full rotation
//! 4. `reset()` → idle, further ticks are ignored

use hunllef_types::Style;
use serde::{Deserialize, Serialize};

use super::event::CueEvent;
use super::timing::RotationTiming;
use crate::view::ViewUpdate;

/// Countdown state that can be captured and restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineState {
    pub active: bool,
    pub style: Style,
    pub counter_ms: i32,
}

/// What an engine operation wants shown and heard.
///
/// View updates are listed in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub view: Vec<ViewUpdate>,
    pub cue: Option<CueEvent>,
}

impl EngineOutput {
    pub fn is_empty(&self) -> bool {
        self.view.is_empty() && self.cue.is_none()
    }
}

/// The rotation countdown.
#[derive(Debug, Clone, Default)]
pub struct RotationEngine {
    state: EngineState,
    timing: RotationTiming,
    /// Bumped by every `start()` so ticks scheduled for an earlier run can be told apart
    session: u64,
}

impl RotationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timing(timing: RotationTiming) -> Self {
        if !timing.warnings_aligned() {
            tracing::warn!(
                ?timing,
                "Rotation timing is not aligned to the tick period, warnings may never fire"
            );
        }

        Self {
            state: EngineState::default(),
            timing,
            session: 0,
        }
    }

    /// Rebuild an engine from a snapshot taken with [`RotationEngine::snapshot`]
    pub fn restore(state: EngineState, timing: RotationTiming) -> Self {
        let mut engine = Self::with_timing(timing);
        engine.state = state;
        engine
    }

    pub fn snapshot(&self) -> EngineState {
        self.state
    }

    pub fn timing(&self) -> &RotationTiming {
        &self.timing
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn style(&self) -> Style {
        self.state.style
    }

    pub fn counter_ms(&self) -> i32 {
        self.state.counter_ms
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Begin (or restart) a rotation from Ranged.
    pub fn start(&mut self) -> EngineOutput {
        if self.state.active {
            tracing::debug!(
                style = ?self.state.style,
                counter_ms = self.state.counter_ms,
                "Restarting active rotation"
            );
        }

        self.session = self.session.wrapping_add(1);
        self.state = EngineState {
            active: true,
            style: Style::Ranged,
            counter_ms: self.timing.initial_counter_ms,
        };

        tracing::info!(
            session = self.session,
            counter_ms = self.state.counter_ms,
            "Rotation started"
        );

        EngineOutput {
            view: vec![
                ViewUpdate::Style(Style::Ranged),
                ViewUpdate::CounterActive(true),
            ],
            cue: None,
        }
    }

    /// Defer the next switch by one attack. Returns false when idle.
    pub fn trample(&mut self) -> bool {
        if !self.state.active {
            return false;
        }

        self.state.counter_ms = self
            .state
            .counter_ms
            .saturating_add(self.timing.attack_duration_ms);
        tracing::debug!(counter_ms = self.state.counter_ms, "Trample");
        true
    }

    /// Stop the rotation. Safe to call when already idle.
    pub fn reset(&mut self) -> EngineOutput {
        if self.state.active {
            tracing::info!(
                style = ?self.state.style,
                counter_ms = self.state.counter_ms,
                "Rotation reset"
            );
        } else {
            tracing::debug!("Reset while idle");
        }

        self.state.active = false;

        EngineOutput {
            view: vec![ViewUpdate::CounterActive(false)],
            cue: None,
        }
    }

    /// Advance the countdown by one tick.
    ///
    /// At most one cue fires per tick. Warnings compare the counter for
    /// exact equality with their threshold.
    pub fn tick(&mut self) -> EngineOutput {
        let mut output = EngineOutput::default();
        if !self.state.active {
            return output;
        }

        self.state.counter_ms -= self.timing.counter_interval_ms;
        output.view.push(ViewUpdate::Time(
            self.state.counter_ms + self.timing.display_offset_ms,
        ));

        if self.state.counter_ms == self.timing.two_sec_warning_ms {
            output.cue = Some(CueEvent::TwoSecWarning);
            return output;
        }

        if self.state.counter_ms == self.timing.one_sec_warning_ms {
            output.cue = Some(CueEvent::OneSecWarning);
            return output;
        }

        if self.state.counter_ms <= 0 {
            let next = self.state.style.opposite();
            output.cue = Some(CueEvent::Switched(next));
            output.view.push(ViewUpdate::Style(next));

            self.state.style = next;
            self.state.counter_ms = self.timing.rotation_duration_ms;

            tracing::info!(style = ?next, "Boss switched style");
        }

        output
    }
}

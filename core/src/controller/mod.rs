//! Helper controller - wires panel buttons, clock ticks, and host signals
//!
//! Architecture:
//! - Engine: `Arc<Mutex<RotationEngine>>` shared between the UI context and the tick sink
//! - Clock: owned here, drives the tick sink on the timer context
//! - View: updates go out through a `ViewSender` while the engine lock is held,
//!   so the UI sees them in the same order the engine produced them
//! - Cues: emitted after the lock is released, audio never delays the countdown


use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::audio::CueEmitter;
use crate::clock::{Clock, TickSink};
use crate::config::ConfigReader;
use crate::host::{LocationProvider, NavigationHost};
use crate::region::in_gauntlet;
use crate::rotation::{EngineState, RotationEngine, RotationTiming};
use crate::view::{PanelAction, ViewSender, ViewUpdate};

fn lock(engine: &Mutex<RotationEngine>) -> MutexGuard<'_, RotationEngine> {
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

/// Run host-facing code, logging instead of unwinding into the caller
fn guarded<R>(what: &str, f: impl FnOnce() -> R) -> Option<R> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            tracing::error!(panic = panic_message(payload.as_ref()), "{what} panicked");
            None
        }
    }
}

/// Owns the rotation and everything that drives it.
///
/// All methods are called from the UI context.
pub struct Controller {
    engine: Arc<Mutex<RotationEngine>>,
    clock: Box<dyn Clock>,
    cues: CueEmitter,
    view: ViewSender,
    navigation: Arc<dyn NavigationHost>,
    location: Arc<dyn LocationProvider>,
    config: Arc<dyn ConfigReader>,
    was_in_region: bool,
}

impl Controller {
    pub fn new(
        clock: Box<dyn Clock>,
        view: ViewSender,
        cues: CueEmitter,
        navigation: Arc<dyn NavigationHost>,
        location: Arc<dyn LocationProvider>,
        config: Arc<dyn ConfigReader>,
    ) -> Self {
        Self {
            engine: Arc::new(Mutex::new(RotationEngine::new())),
            clock,
            cues,
            view,
            navigation,
            location,
            config,
            was_in_region: false,
        }
    }

    /// Replace the rotation timing. Stops a running rotation and idles the panel.
    pub fn with_timing(mut self, timing: RotationTiming) -> Self {
        self.clock.cancel();
        if lock(&self.engine).is_active() {
            self.view.send(ViewUpdate::CounterActive(false));
        }
        self.engine = Arc::new(Mutex::new(RotationEngine::with_timing(timing)));
        self
    }

    pub fn engine_state(&self) -> EngineState {
        lock(&self.engine).snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_active()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Put the panel in idle mode and mount it according to `auto_hide`
    pub fn startup(&mut self) {
        self.view.send(ViewUpdate::CounterActive(false));

        if self.config.auto_hide() {
            self.was_in_region = self.in_region();
            self.update_navigation(self.was_in_region, true);
        } else {
            self.update_navigation(true, false);
        }

        tracing::info!(auto_hide = self.config.auto_hide(), "Helper started");
    }

    /// Unmount the panel and stop the countdown
    pub fn shutdown(&mut self) {
        self.update_navigation(false, false);
        self.clock.cancel();

        let mut engine = lock(&self.engine);
        if engine.is_active() {
            self.view.send_all(engine.reset().view);
        }

        tracing::info!("Helper shut down");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panel buttons
    // ─────────────────────────────────────────────────────────────────────────

    pub fn handle(&mut self, action: PanelAction) {
        match action {
            PanelAction::Start => self.start(),
            PanelAction::Trample => self.trample(),
            PanelAction::Reset => self.reset(),
        }
    }

    /// Start (or restart) the rotation and its clock
    pub fn start(&mut self) {
        if self.clock.is_active() {
            self.clock.cancel();
        }

        let (session, period) = {
            let mut engine = lock(&self.engine);
            let output = engine.start();
            self.view.send_all(output.view);
            (engine.session(), engine.timing().tick_period())
        };

        let sink = self.tick_sink(session);
        self.clock.schedule(period, sink);
    }

    pub fn trample(&mut self) {
        if !lock(&self.engine).trample() {
            tracing::debug!("Trample ignored, rotation idle");
        }
    }

    /// Stop the rotation. No tick reaches the engine once this returns.
    pub fn reset(&mut self) {
        self.clock.cancel();

        let mut engine = lock(&self.engine);
        let output = engine.reset();
        self.view.send_all(output.view);
    }

    fn tick_sink(&self, session: u64) -> TickSink {
        let engine = Arc::clone(&self.engine);
        let view = self.view.clone();
        let cues = self.cues.clone();

        Box::new(move || {
            guarded("Rotation tick", || {
                let cue = {
                    let mut engine = lock(&engine);
                    // Left over from a previous start()
                    if engine.session() != session {
                        return;
                    }
                    let output = engine.tick();
                    view.send_all(output.view);
                    output.cue
                };

                if let Some(cue) = cue {
                    cues.emit(cue);
                }
            });
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Host signals
    // ─────────────────────────────────────────────────────────────────────────

    /// Host game tick: follow the player in and out of the encounter when auto-hide is on
    pub fn on_game_tick(&mut self) {
        if !self.config.auto_hide() {
            return;
        }

        let in_region = self.in_region();
        if in_region != self.was_in_region {
            tracing::debug!(in_region, "Encounter region changed");
            self.update_navigation(in_region, true);
            self.was_in_region = in_region;
        }
    }

    /// Re-evaluate panel visibility after a settings change
    pub fn on_config_changed(&mut self) {
        let auto_hide = self.config.auto_hide();
        let in_region = self.in_region();
        tracing::info!(auto_hide, mute = self.config.mute(), "Config changed");

        self.update_navigation(!auto_hide || in_region, false);
        self.was_in_region = in_region;
    }

    fn in_region(&self) -> bool {
        guarded("Location query", || in_gauntlet(self.location.as_ref())).unwrap_or(false)
    }

    fn update_navigation(&self, enable: bool, select: bool) {
        guarded("Navigation update", || {
            if enable {
                tracing::debug!(select, "Mounting panel");
                self.navigation.add_navigation();
                if select {
                    self.navigation.select_navigation();
                }
            } else {
                tracing::debug!("Unmounting panel");
                self.navigation.remove_navigation();
            }
        });
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.clock.cancel();
    }
}

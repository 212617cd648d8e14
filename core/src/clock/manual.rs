use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::{Clock, TickSink};

#[derive(Default)]
struct ManualState {
    sink: Option<TickSink>,
    period: Option<Duration>,
    /// Bumped on every schedule/cancel so a sink taken out for a fire is not put back stale
    epoch: u64,
    fired: u64,
}

/// Clock that only fires when [`ManualClock::advance`] is called.
///
/// Clones share one schedule: hand one clone to the controller and keep
/// another to drive it.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Arc<Mutex<ManualState>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fire the sink up to `ticks` times. Returns how many fires happened.
    ///
    /// Stops early if the schedule is cancelled or replaced from inside the sink.
    pub fn advance(&self, ticks: usize) -> usize {
        let mut fired = 0;

        for _ in 0..ticks {
            let (mut sink, epoch) = {
                let mut state = self.lock();
                match state.sink.take() {
                    Some(sink) => (sink, state.epoch),
                    None => break,
                }
            };

            sink();
            fired += 1;

            let mut state = self.lock();
            state.fired += 1;
            if state.epoch != epoch {
                break;
            }
            state.sink = Some(sink);
        }

        fired
    }

    /// Total fires across all schedules
    pub fn fired(&self) -> u64 {
        self.lock().fired
    }

    pub fn period(&self) -> Option<Duration> {
        self.lock().period
    }
}

impl Clock for ManualClock {
    fn schedule(&mut self, period: Duration, sink: TickSink) {
        let mut state = self.lock();
        debug_assert!(
            state.period.is_none(),
            "ManualClock scheduled while already active"
        );
        state.epoch += 1;
        state.period = Some(period);
        state.sink = Some(sink);
    }

    fn cancel(&mut self) {
        let mut state = self.lock();
        state.epoch += 1;
        state.period = None;
        state.sink = None;
    }

    fn is_active(&self) -> bool {
        self.lock().period.is_some()
    }
}

impl std::fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("ManualClock")
            .field("period", &state.period)
            .field("fired", &state.fired)
            .finish()
    }
}

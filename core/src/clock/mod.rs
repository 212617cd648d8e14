//! Periodic tick sources
//!
//! A [`Clock`] fires a single registered sink at a fixed rate. The first fire
//! happens immediately on `schedule`, then once per period.
//!
//! - [`IntervalClock`]: tokio task driven by `tokio::time::interval`
//! - [`ManualClock`]: fires only when told to, for tests and replays

mod interval;
mod manual;

use std::time::Duration;

pub use interval::IntervalClock;
pub use manual::ManualClock;

/// Callback invoked on every tick
pub type TickSink = Box<dyn FnMut() + Send + 'static>;

pub trait Clock: Send {
    /// Start firing `sink` every `period`.
    ///
    /// Only one schedule may be active at a time. Scheduling while active is
    /// a programming error (asserted in debug builds); release builds cancel
    /// the previous schedule first.
    fn schedule(&mut self, period: Duration, sink: TickSink);

    /// Stop firing. A fire already in progress may finish but the sink is
    /// never called again for this schedule.
    fn cancel(&mut self);

    fn is_active(&self) -> bool;
}

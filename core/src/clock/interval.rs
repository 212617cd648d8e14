use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{Clock, TickSink};

struct Running {
    handle: JoinHandle<()>,
    stopped: Arc<AtomicBool>,
}

/// Fixed-rate clock backed by a tokio task.
///
/// Ticks run one at a time on the task, so sinks never overlap. Deadlines are
/// fixed multiples of the period from the first tick; a late tick is skipped
/// rather than bursted.
pub struct IntervalClock {
    runtime: Handle,
    running: Option<Running>,
}

impl IntervalClock {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            running: None,
        }
    }

    /// Clock on the runtime of the calling task. Panics outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl Clock for IntervalClock {
    fn schedule(&mut self, period: Duration, mut sink: TickSink) {
        debug_assert!(
            !self.is_active(),
            "IntervalClock scheduled while already active"
        );
        self.cancel();

        let stopped = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stopped);

        let handle = self.runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                if flag.load(Ordering::Acquire) {
                    break;
                }
                sink();
            }
        });

        tracing::debug!(?period, "Clock scheduled");
        self.running = Some(Running { handle, stopped });
    }

    fn cancel(&mut self) {
        if let Some(running) = self.running.take() {
            running.stopped.store(true, Ordering::Release);
            running.handle.abort();
            tracing::debug!("Clock cancelled");
        }
    }

    fn is_active(&self) -> bool {
        self.running.is_some()
    }
}

impl Drop for IntervalClock {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    fn counting_sink(count: &Arc<AtomicUsize>) -> TickSink {
        let count = Arc::clone(count);
        Box::new(move || {
            count.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn fires_immediately_then_every_period() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut clock = IntervalClock::current();

        clock.schedule(Duration::from_millis(100), counting_sink(&count));
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(1_049)).await;
        assert_eq!(count.load(Ordering::SeqCst), 11);

        clock.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn no_drift_over_a_minute() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut clock = IntervalClock::current();

        clock.schedule(Duration::from_millis(100), counting_sink(&count));
        tokio::time::sleep(Duration::from_millis(60_050)).await;

        let fired = count.load(Ordering::SeqCst);
        assert!((600..=601).contains(&fired), "fired {fired} times");
        clock.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut clock = IntervalClock::current();

        clock.schedule(Duration::from_millis(100), counting_sink(&count));
        tokio::time::sleep(Duration::from_millis(550)).await;
        clock.cancel();
        assert!(!clock.is_active());

        let fired = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), fired);
    }

    #[tokio::test(start_paused = true)]
    async fn reschedule_after_cancel() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut clock = IntervalClock::current();

        clock.schedule(Duration::from_millis(100), counting_sink(&first));
        tokio::time::sleep(Duration::from_millis(250)).await;
        clock.cancel();
        let first_total = first.load(Ordering::SeqCst);

        clock.schedule(Duration::from_millis(100), counting_sink(&second));
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(first.load(Ordering::SeqCst), first_total);
        assert_eq!(second.load(Ordering::SeqCst), 3);
        clock.cancel();
    }
}

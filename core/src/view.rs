//! Display surface for the rotation
//!
//! The view is owned by the host UI and only ever touched from the UI
//! context. The timer side never calls it directly: it sends
//! [`ViewUpdate`]s through a [`ViewSender`], and the UI context applies them
//! in order with a [`ViewPump`].

use hunllef_types::{Color, Style};
use tokio::sync::mpsc;

/// Passive rotation display.
pub trait RotationView {
    fn set_style(&mut self, label: &str, color: Color);

    /// Remaining time in milliseconds, already offset for display
    fn set_time(&mut self, ms: i32);

    /// Running mode enables Trample/Reset, idle mode enables Start
    fn set_counter_active(&mut self, active: bool);
}

/// Buttons on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    Start,
    Trample,
    Reset,
}

/// A single change to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewUpdate {
    Style(Style),
    Time(i32),
    CounterActive(bool),
}

impl ViewUpdate {
    pub fn apply(self, view: &mut dyn RotationView) {
        match self {
            ViewUpdate::Style(style) => view.set_style(style.label(), style.color()),
            ViewUpdate::Time(ms) => view.set_time(ms),
            ViewUpdate::CounterActive(active) => view.set_counter_active(active),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Marshaling
// ─────────────────────────────────────────────────────────────────────────────

/// Create the channel between the timer side and the UI context
pub fn view_channel() -> (ViewSender, mpsc::UnboundedReceiver<ViewUpdate>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ViewSender { tx }, rx)
}

/// Sending half, cheap to clone into tick callbacks
#[derive(Debug, Clone)]
pub struct ViewSender {
    tx: mpsc::UnboundedSender<ViewUpdate>,
}

impl ViewSender {
    pub fn send(&self, update: ViewUpdate) {
        if self.tx.send(update).is_err() {
            tracing::trace!(?update, "View closed, dropping update");
        }
    }

    pub fn send_all(&self, updates: impl IntoIterator<Item = ViewUpdate>) {
        for update in updates {
            self.send(update);
        }
    }
}

/// Applies queued updates to the view on the UI context
pub struct ViewPump<V> {
    rx: mpsc::UnboundedReceiver<ViewUpdate>,
    view: V,
}

impl<V: RotationView> ViewPump<V> {
    pub fn new(rx: mpsc::UnboundedReceiver<ViewUpdate>, view: V) -> Self {
        Self { rx, view }
    }

    /// Apply everything queued so far. Returns the number of updates applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.rx.try_recv() {
            update.apply(&mut self.view);
            applied += 1;
        }
        applied
    }

    /// Apply updates as they arrive until every sender is dropped
    pub async fn run(mut self) -> V {
        while let Some(update) = self.rx.recv().await {
            update.apply(&mut self.view);
        }
        self.view
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls(Vec<String>);

    impl RotationView for Calls {
        fn set_style(&mut self, label: &str, color: Color) {
            self.0.push(format!("style {label} {color:?}"));
        }

        fn set_time(&mut self, ms: i32) {
            self.0.push(format!("time {ms}"));
        }

        fn set_counter_active(&mut self, active: bool) {
            self.0.push(format!("active {active}"));
        }
    }

    #[test]
    fn pump_applies_in_order() {
        let (tx, rx) = view_channel();
        let mut pump = ViewPump::new(rx, Calls::default());

        tx.send_all([
            ViewUpdate::Time(1_000),
            ViewUpdate::Style(Style::Mage),
            ViewUpdate::CounterActive(false),
        ]);

        assert_eq!(pump.pump(), 3);
        assert_eq!(
            pump.view().0,
            vec![
                "time 1000".to_string(),
                "style Mage [0, 255, 255, 255]".to_string(),
                "active false".to_string(),
            ]
        );
        assert_eq!(pump.pump(), 0);
    }

    #[test]
    fn send_after_view_dropped_is_harmless() {
        let (tx, rx) = view_channel();
        drop(rx);
        tx.send(ViewUpdate::Time(0));
    }

    #[tokio::test]
    async fn run_drains_until_senders_drop() {
        let (tx, rx) = view_channel();
        let pump = ViewPump::new(rx, Calls::default());

        let task = tokio::spawn(pump.run());
        tx.send(ViewUpdate::Style(Style::Ranged));
        tx.send(ViewUpdate::Time(28_000));
        drop(tx);

        let view = task.await.unwrap();
        assert_eq!(view.0.len(), 2);
    }
}

//! Panel view model
//!
//! Plain state for the helper panel: what the style label says, what color
//! it is, what the countdown reads, and which buttons can be pressed. A UI
//! toolkit renders this; nothing here draws.

use hunllef_core::{PanelAction, RotationView};
use hunllef_types::Color;

/// Countdown text with one decimal second, e.g. 28500 → "28.5"
pub fn format_countdown(ms: i32) -> String {
    let tenths = ms.max(0) / 100;
    format!("{}.{}", tenths / 10, tenths % 10)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    style_label: String,
    style_color: Color,
    time_text: String,
    counter_active: bool,
}

impl PanelView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style_label(&self) -> &str {
        &self.style_label
    }

    pub fn style_color(&self) -> Color {
        self.style_color
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn counter_active(&self) -> bool {
        self.counter_active
    }

    /// Whether the button for `action` can be pressed right now
    pub fn is_enabled(&self, action: PanelAction) -> bool {
        match action {
            PanelAction::Start => !self.counter_active,
            PanelAction::Trample | PanelAction::Reset => self.counter_active,
        }
    }
}

impl RotationView for PanelView {
    fn set_style(&mut self, label: &str, color: Color) {
        self.style_label = label.to_string();
        self.style_color = color;
    }

    fn set_time(&mut self, ms: i32) {
        self.time_text = format_countdown(ms);
    }

    fn set_counter_active(&mut self, active: bool) {
        self.counter_active = active;
    }
}

use hunllef_types::Style;

/// Audio-worthy moments in a rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueEvent {
    /// Two seconds until the boss switches
    TwoSecWarning,
    /// One second until the boss switches
    OneSecWarning,
    /// The boss just switched to this style
    Switched(Style),
}

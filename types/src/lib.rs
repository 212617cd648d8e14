//! Shared configuration types for the Hunllef helper
//!
//! This crate contains serializable types that are shared between the
//! headless core (hunllef-core) and the host adapters (hunllef-app).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color
pub type Color = [u8; 4];

// ─────────────────────────────────────────────────────────────────────────────
// Attack Style
// ─────────────────────────────────────────────────────────────────────────────

/// Attack style the boss is currently using.
///
/// The player must protect against this style until the next switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Style {
    /// Every rotation starts here
    #[default]
    Ranged,
    Mage,
}

impl Style {
    /// The style the boss switches to next
    pub fn opposite(self) -> Self {
        match self {
            Style::Ranged => Style::Mage,
            Style::Mage => Style::Ranged,
        }
    }

    /// Display label shown in the panel
    pub fn label(self) -> &'static str {
        match self {
            Style::Ranged => "Ranged",
            Style::Mage => "Mage",
        }
    }

    /// Label color shown in the panel (Ranged green, Mage cyan)
    pub fn color(self) -> Color {
        match self {
            Style::Ranged => style_colors::RANGED,
            Style::Mage => style_colors::MAGE,
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Default Color Constants
// ─────────────────────────────────────────────────────────────────────────────

pub mod style_colors {
    use super::Color;

    pub const RANGED: Color = [0, 255, 0, 255]; // Green
    pub const MAGE: Color = [0, 255, 255, 255]; // Cyan
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper Configuration
// ─────────────────────────────────────────────────────────────────────────────

fn default_volume() -> u8 {
    100
}

/// User-facing helper settings.
///
/// Read at the moment they are needed (mute at cue time, auto-hide on every
/// game tick), so edits take effect without restarting the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Only show the panel while the player is inside the Gauntlet
    pub auto_hide: bool,

    /// Suppress all audio cues
    pub mute: bool,

    /// Playback volume (0-100)
    #[serde(default = "default_volume")]
    pub volume: u8,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            auto_hide: false,
            mute: false,
            volume: default_volume(),
        }
    }
}

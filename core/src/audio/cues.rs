use hunllef_types::Style;

use crate::rotation::CueEvent;

/// Bundled voice clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueClip {
    One,
    Two,
    Mage,
    Range,
}

pub const SOUND_ONE: CueClip = CueClip::One;
pub const SOUND_TWO: CueClip = CueClip::Two;
pub const SOUND_MAGE: CueClip = CueClip::Mage;
pub const SOUND_RANGE: CueClip = CueClip::Range;

impl CueClip {
    pub const ALL: [CueClip; 4] = [CueClip::One, CueClip::Two, CueClip::Mage, CueClip::Range];

    /// Resource file name inside the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            CueClip::One => "one.wav",
            CueClip::Two => "two.wav",
            CueClip::Mage => "mage.wav",
            CueClip::Range => "range.wav",
        }
    }
}

impl std::fmt::Display for CueClip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CueClip::One => "SOUND_ONE",
            CueClip::Two => "SOUND_TWO",
            CueClip::Mage => "SOUND_MAGE",
            CueClip::Range => "SOUND_RANGE",
        };
        f.write_str(name)
    }
}

impl From<CueEvent> for CueClip {
    fn from(event: CueEvent) -> Self {
        match event {
            CueEvent::TwoSecWarning => CueClip::Two,
            CueEvent::OneSecWarning => CueClip::One,
            CueEvent::Switched(Style::Mage) => CueClip::Mage,
            CueEvent::Switched(Style::Ranged) => CueClip::Range,
        }
    }
}

//! Audio cues for rotation events
//!
//! The engine produces [`CueEvent`](crate::rotation::CueEvent)s; the
//! [`CueEmitter`] maps them to bundled voice clips and hands them to the
//! host's [`AudioPlayer`]. Playback failures never reach the timer.

mod cues;
mod emitter;
mod error;

pub use cues::{CueClip, SOUND_MAGE, SOUND_ONE, SOUND_RANGE, SOUND_TWO};
pub use emitter::{AudioPlayer, CueEmitter};
pub use error::AudioError;

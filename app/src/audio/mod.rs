//! Audio playback for rotation cues
//!
//! Clips are plain files looked up in a user sounds directory first, then
//! in the bundled sounds directory. Playback itself needs the `playback`
//! feature.

mod library;
#[cfg(feature = "playback")]
mod player;

pub use library::SoundLibrary;
#[cfg(feature = "playback")]
pub use player::RodioPlayer;

//! Error types for audio playback

use std::path::PathBuf;
use thiserror::Error;

use super::CueClip;

/// Reasons a cue could not be played
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no sound file for {clip} (looked for {path})")]
    MissingClip { clip: CueClip, path: PathBuf },

    #[error("failed to open sound file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {clip}: {reason}")]
    Decode { clip: CueClip, reason: String },

    #[error("audio output unavailable: {reason}")]
    Device { reason: String },
}

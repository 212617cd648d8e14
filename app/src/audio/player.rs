//! Cue playback through rodio
//!
//! Each clip plays on its own short-lived thread that owns the output stream
//! and sink. The thread waits for the clip to finish and drops both, which
//! closes the clip.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use hunllef_core::{AudioError, AudioPlayer, CueClip, SharedConfig};
use rodio::{Decoder, OutputStream, Sink};

use super::SoundLibrary;

pub struct RodioPlayer {
    library: SoundLibrary,
    /// Volume is read on every play so settings changes apply to the next cue
    config: SharedConfig,
}

impl RodioPlayer {
    pub fn new(library: SoundLibrary, config: SharedConfig) -> Self {
        Self { library, config }
    }
}

impl AudioPlayer for RodioPlayer {
    fn play(&self, clip: CueClip) -> Result<(), AudioError> {
        let path = self.library.resolve(clip)?;
        let volume = self.config.get().volume;

        std::thread::Builder::new()
            .name("cue-playback".to_string())
            .spawn(move || {
                if let Err(err) = play_file(clip, &path, volume) {
                    tracing::error!(%clip, error = %err, "Cue playback failed");
                }
            })
            .map_err(|e| AudioError::Device {
                reason: format!("failed to spawn playback thread: {e}"),
            })?;

        Ok(())
    }
}

/// Blocking: plays `path` to the end on the default output device
fn play_file(clip: CueClip, path: &Path, volume: u8) -> Result<(), AudioError> {
    let (_stream, stream_handle) = OutputStream::try_default().map_err(|e| AudioError::Device {
        reason: e.to_string(),
    })?;

    let file = File::open(path).map_err(|source| AudioError::Open {
        path: PathBuf::from(path),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
        clip,
        reason: e.to_string(),
    })?;

    let sink = Sink::try_new(&stream_handle).map_err(|e| AudioError::Device {
        reason: e.to_string(),
    })?;

    sink.set_volume(f32::from(volume.min(100)) / 100.0);
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

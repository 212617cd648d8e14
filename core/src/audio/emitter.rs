//! Cue dispatch to the host audio facility

use std::sync::Arc;

use super::{AudioError, CueClip};
use crate::config::ConfigReader;
use crate::rotation::CueEvent;

/// Host audio facility.
///
/// `play` must not block: implementations queue or spawn the playback and
/// return. Overlapping clips are allowed.
pub trait AudioPlayer: Send + Sync {
    fn play(&self, clip: CueClip) -> Result<(), AudioError>;
}

/// Turns rotation events into clip playback requests.
///
/// Holds no state of its own; clones share the same player and config.
#[derive(Clone)]
pub struct CueEmitter {
    player: Arc<dyn AudioPlayer>,
    config: Arc<dyn ConfigReader>,
}

impl CueEmitter {
    pub fn new(player: Arc<dyn AudioPlayer>, config: Arc<dyn ConfigReader>) -> Self {
        Self { player, config }
    }

    /// Play the clip for `event` unless muted. Failures are logged, never returned.
    pub fn emit(&self, event: CueEvent) {
        let clip = CueClip::from(event);

        if self.config.mute() {
            tracing::trace!(%clip, "Cue muted");
            return;
        }

        tracing::debug!(%clip, ?event, "Playing cue");
        if let Err(err) = self.player.play(clip) {
            tracing::error!(%clip, error = %err, "Failed to play cue");
        }
    }
}

impl std::fmt::Debug for CueEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CueEmitter")
            .field("mute", &self.config.mute())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use hunllef_types::{HelperConfig, Style};

    use super::*;
    use crate::config::SharedConfig;

    #[derive(Default)]
    struct RecordingPlayer {
        played: Mutex<Vec<CueClip>>,
        fail: bool,
    }

    impl AudioPlayer for RecordingPlayer {
        fn play(&self, clip: CueClip) -> Result<(), AudioError> {
            self.played.lock().unwrap().push(clip);
            if self.fail {
                return Err(AudioError::MissingClip {
                    clip,
                    path: PathBuf::from(clip.file_name()),
                });
            }
            Ok(())
        }
    }

    fn emitter(player: Arc<RecordingPlayer>, mute: bool) -> (CueEmitter, SharedConfig) {
        let config = SharedConfig::new(HelperConfig {
            mute,
            ..Default::default()
        });
        (CueEmitter::new(player, Arc::new(config.clone())), config)
    }

    #[test]
    fn emits_mapped_clip() {
        let player = Arc::new(RecordingPlayer::default());
        let (cues, _) = emitter(player.clone(), false);

        cues.emit(CueEvent::TwoSecWarning);
        cues.emit(CueEvent::Switched(Style::Ranged));

        assert_eq!(*player.played.lock().unwrap(), vec![CueClip::Two, CueClip::Range]);
    }

    #[test]
    fn mute_suppresses_playback() {
        let player = Arc::new(RecordingPlayer::default());
        let (cues, _) = emitter(player.clone(), true);

        cues.emit(CueEvent::OneSecWarning);
        assert!(player.played.lock().unwrap().is_empty());
    }

    #[test]
    fn mute_is_read_at_emit_time() {
        let player = Arc::new(RecordingPlayer::default());
        let (cues, config) = emitter(player.clone(), false);

        cues.emit(CueEvent::OneSecWarning);
        config.update(HelperConfig {
            mute: true,
            ..Default::default()
        });
        cues.emit(CueEvent::OneSecWarning);

        assert_eq!(player.played.lock().unwrap().len(), 1);
    }

    #[test]
    fn playback_failure_is_swallowed() {
        let player = Arc::new(RecordingPlayer {
            fail: true,
            ..Default::default()
        });
        let (cues, _) = emitter(player.clone(), false);

        cues.emit(CueEvent::Switched(Style::Mage));
        cues.emit(CueEvent::Switched(Style::Ranged));

        assert_eq!(player.played.lock().unwrap().len(), 2);
    }
}

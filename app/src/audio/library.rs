use std::path::PathBuf;

use hunllef_core::{AudioError, CueClip};

/// Where cue sound files live
#[derive(Debug, Clone)]
pub struct SoundLibrary {
    /// User overrides, checked first
    user_sounds_dir: Option<PathBuf>,

    /// Sounds shipped with the helper
    bundled_sounds_dir: PathBuf,
}

impl SoundLibrary {
    pub fn new(bundled_sounds_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_sounds_dir: None,
            bundled_sounds_dir: bundled_sounds_dir.into(),
        }
    }

    pub fn with_user_dir(mut self, user_sounds_dir: impl Into<PathBuf>) -> Self {
        self.user_sounds_dir = Some(user_sounds_dir.into());
        self
    }

    /// Path of the file to play for `clip`
    pub fn resolve(&self, clip: CueClip) -> Result<PathBuf, AudioError> {
        let file_name = clip.file_name();

        if let Some(user_path) = self
            .user_sounds_dir
            .as_ref()
            .map(|dir| dir.join(file_name))
            .filter(|path| path.is_file())
        {
            return Ok(user_path);
        }

        let bundled_path = self.bundled_sounds_dir.join(file_name);
        if bundled_path.is_file() {
            Ok(bundled_path)
        } else {
            Err(AudioError::MissingClip {
                clip,
                path: bundled_path,
            })
        }
    }

    /// Clips with no file in either directory
    pub fn missing_clips(&self) -> Vec<CueClip> {
        CueClip::ALL
            .into_iter()
            .filter(|clip| self.resolve(*clip).is_err())
            .collect()
    }
}

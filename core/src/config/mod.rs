//! Helper configuration
//!
//! This module re-exports the shared [`HelperConfig`] and provides the
//! runtime handle the engine side reads from, plus persistence for hosts
//! that keep the config on disk.

mod error;

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

pub use error::ConfigError;
pub use hunllef_types::HelperConfig;

const APP_NAME: &str = "hunllef-helper";
const CONFIG_NAME: &str = "config";

/// Read access to the two settings the helper reacts to.
///
/// Values are read every time they are needed, never cached.
pub trait ConfigReader: Send + Sync {
    fn auto_hide(&self) -> bool;
    fn mute(&self) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared Runtime Config
// ─────────────────────────────────────────────────────────────────────────────

/// Config shared between the UI context and the timer context
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<HelperConfig>>,
}

impl SharedConfig {
    pub fn new(config: HelperConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    pub fn get(&self) -> HelperConfig {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the config. Returns true if anything changed.
    pub fn update(&self, config: HelperConfig) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if *guard == config {
            return false;
        }

        tracing::info!(
            auto_hide = config.auto_hide,
            mute = config.mute,
            volume = config.volume,
            "Config updated"
        );
        *guard = config;
        true
    }
}

impl ConfigReader for SharedConfig {
    fn auto_hide(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .auto_hide
    }

    fn mute(&self) -> bool {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).mute
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Persistence
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for HelperConfig persistence
///
/// `load`/`save` use the platform config directory; the `_path` variants
/// let the host pick the file. A missing file loads (and writes) defaults.
pub trait HelperConfigExt: Sized {
    fn load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn load_path(path: &Path) -> Result<Self, ConfigError>;
    fn save_path(&self, path: &Path) -> Result<(), ConfigError>;
}

impl HelperConfigExt for HelperConfig {
    fn load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, CONFIG_NAME)?)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn load_path(path: &Path) -> Result<Self, ConfigError> {
        Ok(confy::load_path(path)?)
    }

    fn save_path(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Save)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_reports_changes() {
        let config = SharedConfig::default();
        assert!(!config.update(HelperConfig::default()));

        let muted = HelperConfig {
            mute: true,
            ..Default::default()
        };
        assert!(config.update(muted.clone()));
        assert!(!config.update(muted));
        assert!(config.mute());
        assert!(!config.auto_hide());
    }

    #[test]
    fn config_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = HelperConfig {
            auto_hide: true,
            mute: true,
            volume: 40,
        };
        config.save_path(&path).unwrap();

        assert_eq!(HelperConfig::load_path(&path).unwrap(), config);
    }

    #[test]
    fn missing_config_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert_eq!(HelperConfig::load_path(&path).unwrap(), HelperConfig::default());
    }

    #[test]
    fn clones_share_state() {
        let config = SharedConfig::default();
        let reader: Arc<dyn ConfigReader> = Arc::new(config.clone());

        config.update(HelperConfig {
            auto_hide: true,
            ..Default::default()
        });
        assert!(reader.auto_hide());
        assert!(config.get().auto_hide);
    }
}

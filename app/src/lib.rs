//! Host adapters for the Hunllef helper
//!
//! Everything the headless core leaves to the host client: a panel view
//! model, sound file lookup and playback, logging setup, and the wiring
//! that assembles a ready-to-run helper.

pub mod audio;
pub mod helper;
pub mod logging;
pub mod panel;

pub use audio::SoundLibrary;
#[cfg(feature = "playback")]
pub use audio::RodioPlayer;
pub use helper::{HostServices, build_helper};
pub use panel::{PanelView, format_countdown};

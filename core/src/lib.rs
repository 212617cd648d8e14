pub mod audio;
pub mod clock;
pub mod config;
pub mod controller;
pub mod host;
pub mod region;
pub mod rotation;
pub mod view;

// Re-exports for convenience
pub use audio::{AudioError, AudioPlayer, CueClip, CueEmitter};
pub use clock::{Clock, IntervalClock, ManualClock, TickSink};
pub use config::{ConfigError, ConfigReader, HelperConfigExt, SharedConfig};
pub use controller::Controller;
pub use host::{LocationProvider, NavigationHost};
pub use hunllef_types::{Color, HelperConfig, Style};
pub use region::{GAUNTLET_REGION_IDS, is_gauntlet_region};
pub use rotation::{CueEvent, EngineOutput, EngineState, RotationEngine, RotationTiming};
pub use view::{PanelAction, RotationView, ViewPump, ViewSender, ViewUpdate, view_channel};

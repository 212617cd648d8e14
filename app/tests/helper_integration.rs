//! Helper wired to a real interval clock, driven on paused tokio time

use std::sync::{Arc, Mutex};
use std::time::Duration;

use hunllef_app::{HostServices, build_helper};
use hunllef_core::{
    AudioError, AudioPlayer, CueClip, HelperConfig, LocationProvider, NavigationHost,
    PanelAction, SharedConfig,
};
use tokio::runtime::Handle;

#[derive(Default)]
struct RecordingPlayer {
    played: Mutex<Vec<CueClip>>,
}

impl AudioPlayer for RecordingPlayer {
    fn play(&self, clip: CueClip) -> Result<(), AudioError> {
        self.played.lock().unwrap().push(clip);
        Ok(())
    }
}

#[derive(Default)]
struct Toolbar {
    mounted: Mutex<bool>,
}

impl NavigationHost for Toolbar {
    fn add_navigation(&self) {
        *self.mounted.lock().unwrap() = true;
    }

    fn remove_navigation(&self) {
        *self.mounted.lock().unwrap() = false;
    }

    fn select_navigation(&self) {}
}

struct Lobby;

impl LocationProvider for Lobby {
    fn current_region(&self) -> Option<u32> {
        Some(12_127)
    }
}

fn host(audio: Arc<RecordingPlayer>, toolbar: Arc<Toolbar>, config: HelperConfig) -> HostServices {
    HostServices {
        navigation: toolbar,
        location: Arc::new(Lobby),
        audio,
        config: SharedConfig::new(config),
    }
}

#[tokio::test(start_paused = true)]
async fn panel_counts_down_and_switches() {
    let audio = Arc::new(RecordingPlayer::default());
    let toolbar = Arc::new(Toolbar::default());
    let (mut controller, mut pump) = build_helper(
        Handle::current(),
        host(audio.clone(), toolbar.clone(), HelperConfig::default()),
    );

    controller.startup();
    assert!(*toolbar.mounted.lock().unwrap());

    controller.handle(PanelAction::Start);
    tokio::time::sleep(Duration::from_millis(1)).await;
    pump.pump();

    let panel = pump.view();
    assert_eq!(panel.style_label(), "Ranged");
    assert_eq!(panel.time_text(), "27.9");
    assert!(panel.counter_active());

    // Tick 270 lands at 26.9 s
    tokio::time::sleep(Duration::from_millis(26_949)).await;
    pump.pump();

    let panel = pump.view();
    assert_eq!(panel.style_label(), "Mage");
    assert_eq!(panel.time_text(), "1.0");
    assert_eq!(
        *audio.played.lock().unwrap(),
        vec![CueClip::Two, CueClip::One, CueClip::Mage]
    );

    controller.handle(PanelAction::Reset);
    tokio::time::sleep(Duration::from_secs(60)).await;
    pump.pump();

    assert!(!pump.view().counter_active());
    assert!(pump.view().is_enabled(PanelAction::Start));
    assert_eq!(audio.played.lock().unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn auto_hide_outside_gauntlet_unmounts_panel() {
    let audio = Arc::new(RecordingPlayer::default());
    let toolbar = Arc::new(Toolbar::default());
    let (mut controller, _pump) = build_helper(
        Handle::current(),
        host(
            audio,
            toolbar.clone(),
            HelperConfig {
                auto_hide: true,
                ..Default::default()
            },
        ),
    );

    controller.startup();
    assert!(!*toolbar.mounted.lock().unwrap());

    controller.shutdown();
    assert!(!*toolbar.mounted.lock().unwrap());
}

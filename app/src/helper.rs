//! Assembles a running helper from host capabilities

use std::sync::Arc;

use hunllef_core::{
    AudioPlayer, Controller, CueEmitter, IntervalClock, LocationProvider, NavigationHost,
    SharedConfig, ViewPump, view_channel,
};
use tokio::runtime::Handle;

use crate::panel::PanelView;

/// What the host client hands to the helper
pub struct HostServices {
    pub navigation: Arc<dyn NavigationHost>,
    pub location: Arc<dyn LocationProvider>,
    pub audio: Arc<dyn AudioPlayer>,
    pub config: SharedConfig,
}

/// Build a controller ticking on `runtime` and the pump that feeds the panel.
///
/// The controller and the pump both belong to the UI context; call
/// `pump.pump()` from the UI loop (or spawn `pump.run()` on a UI-bound
/// executor) to apply updates.
pub fn build_helper(runtime: Handle, host: HostServices) -> (Controller, ViewPump<PanelView>) {
    let (view_tx, view_rx) = view_channel();
    let config = Arc::new(host.config);

    let cues = CueEmitter::new(host.audio, config.clone());
    let controller = Controller::new(
        Box::new(IntervalClock::new(runtime)),
        view_tx,
        cues,
        host.navigation,
        host.location,
        config,
    );

    (controller, ViewPump::new(view_rx, PanelView::new()))
}

use std::sync::{mpsc, Arc};
use std::time::Duration;

use scraper_ui_core::{
    update, Anchors, AppState, AppViewModel, Msg, PreferenceStore, ScrollRequest, UiConfig,
};
use scraper_ui_host::{Clipboard, HostError};
use ui_logging::{advance_dispatch_tick, ui_trace};

use super::effects::EffectRunner;

/// One page's worth of widget state plus the loop that feeds it messages.
///
/// Every message, whether sent by a command or by a fired timer, goes through
/// [`UiSession::dispatch`], so `update` only ever runs on the caller's thread.
pub struct UiSession {
    state: AppState,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
}

impl UiSession {
    pub fn new(
        anchors: Anchors,
        config: UiConfig,
        preferences: Box<dyn PreferenceStore>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Result<Self, HostError> {
        let dark_mode = preferences.load();
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
        let effects = EffectRunner::new(msg_tx, preferences, clipboard)?;

        Ok(Self {
            state: AppState::new(anchors, config, dark_mode),
            msg_rx,
            effects,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs `msg` through `update`, executes its effects, and returns the new
    /// view when something visible changed.
    pub fn dispatch(&mut self, msg: Msg) -> Option<AppViewModel> {
        advance_dispatch_tick();
        ui_trace!("dispatch {:?}", msg);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.consume_dirty().then(|| state.view());
        self.state = state;

        self.effects.enqueue(effects);
        view
    }

    /// Waits up to `timeout` for the next queued message.
    pub fn next_message(&self, timeout: Duration) -> Option<Msg> {
        self.msg_rx.recv_timeout(timeout).ok()
    }

    pub fn take_scroll(&mut self) -> Option<ScrollRequest> {
        self.effects.take_scroll()
    }
}

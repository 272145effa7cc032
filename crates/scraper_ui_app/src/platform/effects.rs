use std::sync::{mpsc, Arc};

use scraper_ui_core::{Effect, Msg, PreferenceStore, ScrollRequest};
use scraper_ui_host::{Clipboard, HostError, Scheduler};
use ui_logging::ui_debug;

/// Executes the effects returned by `update`. Timers and clipboard writes
/// report back on the message channel; scroll requests wait for the renderer.
pub struct EffectRunner {
    scheduler: Scheduler<Msg>,
    preferences: Box<dyn PreferenceStore>,
    clipboard: Arc<dyn Clipboard>,
    pending_scroll: Option<ScrollRequest>,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        preferences: Box<dyn PreferenceStore>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Result<Self, HostError> {
        Ok(Self {
            scheduler: Scheduler::new(msg_tx)?,
            preferences,
            clipboard,
            pending_scroll: None,
        })
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleProgressTick { operation, after } => {
                    self.scheduler.schedule(after, Msg::ProgressTick { operation });
                }
                Effect::ScheduleEmphasisClear { operation, after } => {
                    self.scheduler
                        .schedule(after, Msg::EmphasisElapsed { operation });
                }
                Effect::ScrollIntoView(request) => {
                    ui_debug!("scroll requested to line {:?}", request.line);
                    self.pending_scroll = Some(request);
                }
                Effect::SaveThemePreference { dark_mode } => {
                    self.preferences.save(dark_mode);
                }
                Effect::WriteClipboard { button, text } => {
                    self.scheduler.write_clipboard(
                        self.clipboard.clone(),
                        text,
                        move |result| match result {
                            Ok(()) => Msg::ClipboardWritten { button },
                            Err(err) => {
                                ui_debug!("clipboard write for button {}: {}", button, err);
                                Msg::ClipboardFailed { button }
                            }
                        },
                    );
                }
                Effect::ScheduleCopyReset {
                    button,
                    generation,
                    after,
                } => {
                    self.scheduler
                        .schedule(after, Msg::CopyResetElapsed { button, generation });
                }
                Effect::RequestAnimationFrame { after } => {
                    self.scheduler.schedule(after, Msg::AnimationFrame);
                }
            }
        }
    }

    /// The most recent scroll request not yet shown, if any.
    pub fn take_scroll(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }
}

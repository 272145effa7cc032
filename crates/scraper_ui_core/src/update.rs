use ui_logging::{ui_debug, ui_info, ui_warn};

use crate::effect::ScrollRequest;
use crate::progress::ProgressState;
use crate::search::{search, SearchOutcome};
use crate::{check_url, AppState, Effect, Key, Msg, OperationId, Rect, ScraperMode, Viewport};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FormSubmitted => start_progress(&mut state),
        Msg::ProgressTick { operation } => tick_progress(&mut state, operation),
        Msg::EmphasisElapsed { operation } => {
            let cleared = state
                .progress
                .as_mut()
                .and_then(|progress| progress.live_mut(operation))
                .map(ProgressState::clear_emphasis)
                .is_some();
            if cleared {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::OperationFinished => {
            if let Some(progress) = state.progress.as_mut().and_then(|p| p.active.as_mut()) {
                progress.complete();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::OverlayDismissed => {
            if let Some(dismissed) = state.progress.as_mut().and_then(|p| p.active.take()) {
                ui_debug!("overlay for operation {} dismissed", dismissed.operation());
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchInputChanged(text) => {
            if let Some(search) = state.search.as_mut() {
                search.query_input = text;
            }
            Vec::new()
        }
        Msg::SearchKeyPressed(Key::Enter) | Msg::SearchClicked => run_search(&mut state),
        Msg::SearchKeyPressed(_) => Vec::new(),
        Msg::UrlInputChanged(text) => {
            if let Some(validity) = state.url_validity.as_mut() {
                let next = check_url(&text);
                if *validity != next {
                    *validity = next;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::ScraperTypeChanged(value) => {
            if let Some(mode) = state.scraper_mode.as_mut() {
                let next = ScraperMode::from_select_value(&value);
                if *mode != next {
                    *mode = next;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::ThemeToggleClicked => {
            if state.theme.has_toggle {
                state.theme.dark_mode = !state.theme.dark_mode;
                state.mark_dirty();
                vec![Effect::SaveThemePreference {
                    dark_mode: state.theme.dark_mode,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::CopyClicked { button } => match state
            .copy_buttons
            .get(button)
            .and_then(|b| b.payload())
        {
            Some(text) => vec![Effect::WriteClipboard {
                button,
                text: text.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::ClipboardWritten { button } => {
            let after = state.config.copy_reset_delay();
            match state.copy_buttons.get_mut(button) {
                Some(copy) => {
                    let generation = copy.mark_copied();
                    state.mark_dirty();
                    vec![Effect::ScheduleCopyReset {
                        button,
                        generation,
                        after,
                    }]
                }
                None => Vec::new(),
            }
        }
        Msg::ClipboardFailed { button } => {
            ui_warn!("clipboard write for copy button {} failed", button);
            Vec::new()
        }
        Msg::CopyResetElapsed { button, generation } => {
            let reset = state
                .copy_buttons
                .get_mut(button)
                .is_some_and(|copy| copy.reset(generation));
            if reset {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Scrolled {
            viewport,
            positions,
        } => reveal_counters(&mut state, viewport, &positions),
        Msg::AnimationFrame => advance_counters(&mut state),
        Msg::CardHoverChanged { card, hovered } => {
            if let Some(slot) = state.cards_hovered.get_mut(card) {
                if *slot != hovered {
                    *slot = hovered;
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_progress(state: &mut AppState) -> Vec<Effect> {
    let config = state.config.clone();
    let Some(progress) = state.progress.as_mut() else {
        ui_debug!("form submitted without progress overlay; nothing to animate");
        return Vec::new();
    };

    let operation = progress.next_operation();
    if let Some(previous) = progress.active.as_ref() {
        ui_debug!(
            "operation {} superseded by {}",
            previous.operation(),
            operation
        );
    }
    progress.active = Some(ProgressState::start(
        operation,
        progress.messages.clone(),
        &config,
    ));
    ui_info!("progress simulation {} started", operation);
    state.mark_dirty();

    vec![Effect::ScheduleProgressTick {
        operation,
        after: config.tick_interval(),
    }]
}

fn tick_progress(state: &mut AppState, operation: OperationId) -> Vec<Effect> {
    let tick_interval = state.config.tick_interval();
    let emphasis = state.config.emphasis_duration();
    let Some(progress) = state
        .progress
        .as_mut()
        .and_then(|progress| progress.live_mut(operation))
    else {
        ui_debug!("stale progress tick for operation {} ignored", operation);
        return Vec::new();
    };

    let result = progress.tick();
    let percent = progress.percent();
    let mut effects = Vec::with_capacity(2);
    if result.message_advanced {
        effects.push(Effect::ScheduleEmphasisClear {
            operation,
            after: emphasis,
        });
    }
    if result.reschedule {
        effects.push(Effect::ScheduleProgressTick {
            operation,
            after: tick_interval,
        });
    } else {
        ui_debug!("progress simulation {} holding at {}%", operation, percent);
    }
    state.mark_dirty();
    effects
}

fn run_search(state: &mut AppState) -> Vec<Effect> {
    let min_chars = state.config.min_query_chars;
    let Some(feature) = state.search.as_mut() else {
        return Vec::new();
    };

    let query = feature.query_input.clone();
    let report = match search(&mut feature.container, &query, min_chars) {
        SearchOutcome::Completed(report) => report,
        SearchOutcome::Skipped(_) => return Vec::new(),
    };

    if feature.has_feedback {
        feature.feedback = Some(report.feedback_text());
    }
    let scroll = report.first_highlight.map(|target| {
        Effect::ScrollIntoView(ScrollRequest {
            target,
            line: feature
                .container
                .line_of(target)
                .and_then(|line| feature.container.line_index(line)),
        })
    });
    feature.last_report = Some(report);
    state.mark_dirty();

    scroll.into_iter().collect()
}

fn reveal_counters(state: &mut AppState, viewport: Viewport, positions: &[Rect]) -> Vec<Effect> {
    let config = state.config.clone();
    let mut started = false;
    for (counter, rect) in state.counters.iter_mut().zip(positions) {
        if !counter.has_animated() && viewport.contains(rect) {
            started |= counter.start(&config);
        }
    }
    if !started {
        return Vec::new();
    }
    state.mark_dirty();
    next_frame(state)
}

fn advance_counters(state: &mut AppState) -> Vec<Effect> {
    let config = state.config.clone();
    let mut advanced = false;
    for counter in state.counters.iter_mut().filter(|c| c.is_running()) {
        counter.advance(&config);
        advanced = true;
    }
    if !advanced {
        return Vec::new();
    }
    state.mark_dirty();
    next_frame(state)
}

fn next_frame(state: &AppState) -> Vec<Effect> {
    if state.counters.iter().any(|c| c.is_running()) {
        vec![Effect::RequestAnimationFrame {
            after: state.config.counter_frame(),
        }]
    } else {
        Vec::new()
    }
}

use ui_logging::ui_warn;

use crate::counter::StatCounter;
use crate::progress::{scrape_messages, ProgressState, StatusMessage};
use crate::search::SearchReport;
use crate::theme::toggle_appearance;
use crate::view_model::{
    AppViewModel, CopyButtonView, OverlayView, SearchView, ThemeView,
};
use crate::{
    card_style, Anchors, CopyButton, OperationId, ScraperMode, TextContainer, UiConfig,
    UrlValidity,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProgressFeature {
    pub(crate) messages: Vec<StatusMessage>,
    pub(crate) active: Option<ProgressState>,
    pub(crate) last_operation: OperationId,
}

impl ProgressFeature {
    pub(crate) fn next_operation(&mut self) -> OperationId {
        self.last_operation = self.last_operation.wrapping_add(1);
        self.last_operation
    }

    /// The running simulation, if `operation` is the live one.
    pub(crate) fn live_mut(&mut self, operation: OperationId) -> Option<&mut ProgressState> {
        self.active
            .as_mut()
            .filter(|progress| progress.operation() == operation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchFeature {
    pub(crate) container: TextContainer,
    pub(crate) query_input: String,
    pub(crate) has_feedback: bool,
    pub(crate) feedback: Option<String>,
    pub(crate) last_report: Option<SearchReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ThemeState {
    pub(crate) dark_mode: bool,
    pub(crate) has_toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) config: UiConfig,
    pub(crate) progress: Option<ProgressFeature>,
    pub(crate) search: Option<SearchFeature>,
    pub(crate) url_validity: Option<UrlValidity>,
    pub(crate) scraper_mode: Option<ScraperMode>,
    pub(crate) theme: ThemeState,
    pub(crate) copy_buttons: Vec<CopyButton>,
    pub(crate) counters: Vec<StatCounter>,
    pub(crate) cards_hovered: Vec<bool>,
    dirty: bool,
}

impl AppState {
    pub fn new(anchors: Anchors, config: UiConfig, dark_mode: bool) -> Self {
        Self::with_messages(anchors, config, dark_mode, scrape_messages())
    }

    /// Like [`AppState::new`] with a custom status sequence for the overlay.
    pub fn with_messages(
        anchors: Anchors,
        config: UiConfig,
        dark_mode: bool,
        messages: Vec<StatusMessage>,
    ) -> Self {
        let progress = anchors.progress_overlay.then(|| ProgressFeature {
            messages,
            active: None,
            last_operation: 0,
        });

        let search = anchors.search.map(|search| SearchFeature {
            container: search.container,
            query_input: String::new(),
            has_feedback: search.feedback,
            feedback: None,
            last_report: None,
        });

        let counters = anchors
            .stat_counters
            .iter()
            .filter_map(|raw| {
                let counter = StatCounter::from_data_target(raw);
                if counter.is_none() {
                    ui_warn!("stat counter with unusable data-target {:?} ignored", raw);
                }
                counter
            })
            .collect();

        Self {
            progress,
            search,
            url_validity: anchors.url_input.then_some(UrlValidity::Neutral),
            scraper_mode: anchors.scraper_tooltip.then_some(ScraperMode::Basic),
            theme: ThemeState {
                dark_mode,
                has_toggle: anchors.theme_toggle,
            },
            copy_buttons: anchors
                .copy_buttons
                .into_iter()
                .map(|button| CopyButton::new(button.label, button.payload))
                .collect(),
            counters,
            cards_hovered: vec![false; anchors.feature_cards],
            config,
            dirty: false,
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn dark_mode(&self) -> bool {
        self.theme.dark_mode
    }

    /// The search container as it currently reads, highlights included.
    pub fn search_container(&self) -> Option<&TextContainer> {
        self.search.as_ref().map(|search| &search.container)
    }

    pub fn last_search_report(&self) -> Option<&SearchReport> {
        self.search
            .as_ref()
            .and_then(|search| search.last_report.as_ref())
    }

    pub fn progress(&self) -> Option<&ProgressState> {
        self.progress
            .as_ref()
            .and_then(|progress| progress.active.as_ref())
    }

    pub fn counters_running(&self) -> bool {
        self.counters.iter().any(StatCounter::is_running)
    }

    pub fn view(&self) -> AppViewModel {
        let overlay = self.progress().map(|progress| {
            let (status, detail) = progress
                .current_message()
                .map(|m| (m.status.clone(), m.detail.clone()))
                .unwrap_or_default();
            OverlayView {
                bar_width: progress.bar_width(),
                status,
                detail,
                emphasized: progress.emphasized(),
                completed: progress.is_completed(),
            }
        });

        let search = self.search.as_ref().map(|search| SearchView {
            feedback: search.feedback.clone(),
            match_count: search.last_report.as_ref().map(|r| r.match_count),
            markup: search.container.markup(),
        });

        AppViewModel {
            overlay,
            search,
            url_validity: self.url_validity,
            tooltip: self.scraper_mode.map(ScraperMode::tooltip),
            theme: ThemeView {
                dark_mode: self.theme.dark_mode,
                toggle: self
                    .theme
                    .has_toggle
                    .then(|| toggle_appearance(self.theme.dark_mode)),
            },
            copy_buttons: self
                .copy_buttons
                .iter()
                .map(|button| CopyButtonView {
                    label: button.label().to_string(),
                    copied: button.is_copied(),
                })
                .collect(),
            counters: self.counters.iter().map(StatCounter::displayed).collect(),
            cards: self.cards_hovered.iter().map(|h| card_style(*h)).collect(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything visible changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

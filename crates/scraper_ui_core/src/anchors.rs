use crate::TextContainer;

/// Element handles found on the hosting page.
///
/// Each feature is registered only when all of its handles are present; a
/// feature without its handles is simply absent from the state and every
/// message addressed to it is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchors {
    /// Scrape form together with the overlay, bar, status and subtext nodes.
    pub progress_overlay: bool,
    pub search: Option<SearchAnchors>,
    pub url_input: bool,
    pub scraper_tooltip: bool,
    pub theme_toggle: bool,
    pub copy_buttons: Vec<CopyButtonAnchor>,
    /// Raw `data-target` values of the stat counters, in page order.
    pub stat_counters: Vec<String>,
    pub feature_cards: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAnchors {
    /// The line container; the query field is implied by this struct existing.
    pub container: TextContainer,
    /// Whether the feedback line is present.
    pub feedback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButtonAnchor {
    pub label: String,
    /// Contents of the button's `data-copy` attribute.
    pub payload: Option<String>,
}

impl Anchors {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_progress_overlay(mut self) -> Self {
        self.progress_overlay = true;
        self
    }

    pub fn with_search(mut self, container: TextContainer, feedback: bool) -> Self {
        self.search = Some(SearchAnchors {
            container,
            feedback,
        });
        self
    }

    pub fn with_url_input(mut self) -> Self {
        self.url_input = true;
        self
    }

    pub fn with_scraper_tooltip(mut self) -> Self {
        self.scraper_tooltip = true;
        self
    }

    pub fn with_theme_toggle(mut self) -> Self {
        self.theme_toggle = true;
        self
    }

    pub fn with_copy_button(mut self, label: impl Into<String>, payload: Option<String>) -> Self {
        self.copy_buttons.push(CopyButtonAnchor {
            label: label.into(),
            payload,
        });
        self
    }

    pub fn with_stat_counter(mut self, data_target: impl Into<String>) -> Self {
        self.stat_counters.push(data_target.into());
        self
    }

    pub fn with_feature_cards(mut self, count: usize) -> Self {
        self.feature_cards = count;
        self
    }
}

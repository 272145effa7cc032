use crate::{CardStyle, ToggleAppearance, UrlValidity};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub overlay: Option<OverlayView>,
    pub search: Option<SearchView>,
    pub url_validity: Option<UrlValidity>,
    pub tooltip: Option<&'static str>,
    pub theme: ThemeView,
    pub copy_buttons: Vec<CopyButtonView>,
    /// Value shown by each stat counter; `None` before it first animates.
    pub counters: Vec<Option<u64>>,
    pub cards: Vec<CardStyle>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    /// Bar width in percent.
    pub bar_width: u8,
    pub status: String,
    pub detail: String,
    /// Fade-in class on the status lines.
    pub emphasized: bool,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    /// Visible feedback line; `None` while hidden or when the page has no feedback element.
    pub feedback: Option<String>,
    pub match_count: Option<usize>,
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeView {
    pub dark_mode: bool,
    pub toggle: Option<ToggleAppearance>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButtonView {
    pub label: String,
    pub copied: bool,
}

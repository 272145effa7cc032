//! Scraper UI core: pure state machine and view-model helpers for the scraper's
//! browser front end.
mod anchors;
mod config;
mod copy;
mod counter;
mod document;
mod effect;
mod hover;
mod msg;
mod progress;
mod search;
mod state;
mod theme;
mod tooltip;
mod update;
mod url_check;
mod view_model;

pub use anchors::{Anchors, CopyButtonAnchor, SearchAnchors};
pub use config::UiConfig;
pub use copy::{CopyButton, COPIED_LABEL};
pub use counter::{Rect, StatCounter, Viewport};
pub use document::{NodeId, NodeKind, TextContainer};
pub use effect::{Effect, ScrollRequest};
pub use hover::{card_style, CardStyle};
pub use msg::{Key, Msg};
pub use progress::{scrape_messages, OperationId, ProgressState, StatusMessage, TickResult};
pub use search::{
    clear_highlights, feedback_text, search, SearchOutcome, SearchQuery, SearchReport, SkipReason,
    HIGHLIGHT_CLASS, HIGHLIGHT_TAG,
};
pub use state::AppState;
pub use theme::{toggle_appearance, MemoryPreferenceStore, PreferenceStore, ToggleAppearance};
pub use tooltip::ScraperMode;
pub use update::update;
pub use url_check::{check_url, UrlValidity};
pub use view_model::{AppViewModel, CopyButtonView, OverlayView, SearchView, ThemeView};

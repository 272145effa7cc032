use crate::{OperationId, Rect, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    /// Any key the search field does not react to.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the scrape form; starts a simulated progress run.
    FormSubmitted,
    /// Scheduled progress timer fired.
    ProgressTick { operation: OperationId },
    /// Emphasis on the status text should fade.
    EmphasisElapsed { operation: OperationId },
    /// The real scrape finished.
    OperationFinished,
    /// Overlay was closed or the page is going away.
    OverlayDismissed,
    /// User edited the search field.
    SearchInputChanged(String),
    /// Key released while the search field had focus.
    SearchKeyPressed(Key),
    /// User clicked the search button.
    SearchClicked,
    /// User edited the URL field.
    UrlInputChanged(String),
    /// Scraper mode selector changed to the given value.
    ScraperTypeChanged(String),
    ThemeToggleClicked,
    CopyClicked { button: usize },
    /// Clipboard write requested by `CopyClicked` succeeded.
    ClipboardWritten { button: usize },
    ClipboardFailed { button: usize },
    CopyResetElapsed { button: usize, generation: u64 },
    /// Page scrolled (or first laid out); `positions[i]` is the box of counter `i`.
    Scrolled {
        viewport: Viewport,
        positions: Vec<Rect>,
    },
    /// Display refresh for running counter animations.
    AnimationFrame,
    CardHoverChanged { card: usize, hovered: bool },
    /// Fallback for placeholder wiring.
    NoOp,
}

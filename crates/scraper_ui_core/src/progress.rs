//! Time-based fake progress for a long-running scrape.
//!
//! The simulator only knows about ticks. Scheduling the next tick, clearing the
//! emphasis and finishing the overlay are all driven from outside.

use crate::UiConfig;

/// Identifies one simulated operation. Timers carry it so that ticks scheduled
/// for a dismissed operation can be recognised and dropped.
pub type OperationId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub status: String,
    pub detail: String,
}

impl StatusMessage {
    pub fn new(status: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            detail: detail.into(),
        }
    }
}

const SCRAPE_MESSAGES: [(&str, &str); 7] = [
    (
        "Connecting to website...",
        "This may take a moment for complex websites",
    ),
    (
        "Analyzing page structure...",
        "Parsing HTML structure and identifying key elements",
    ),
    (
        "Extracting content...",
        "Collecting text, links, and media from the webpage",
    ),
    (
        "Processing text data...",
        "Cleaning and processing the extracted data",
    ),
    (
        "Analyzing content...",
        "Running sentiment and readability analysis",
    ),
    (
        "Saving results...",
        "Writing data to output files in your selected format",
    ),
    (
        "Preparing final output...",
        "Almost done! Preparing the final results",
    ),
];

/// The status sequence shown while a scrape request is in flight.
pub fn scrape_messages() -> Vec<StatusMessage> {
    SCRAPE_MESSAGES
        .iter()
        .map(|(status, detail)| StatusMessage::new(*status, *detail))
        .collect()
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// The displayed status/detail pair changed on this tick.
    pub message_advanced: bool,
    /// Another tick should be scheduled.
    pub reschedule: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    operation: OperationId,
    percent: u8,
    message_index: usize,
    messages: Vec<StatusMessage>,
    emphasized: bool,
    completed: bool,
    ceiling: u8,
    message_step: u8,
}

impl ProgressState {
    /// Starts a simulation showing `messages[0]` at 0%.
    pub fn start(operation: OperationId, messages: Vec<StatusMessage>, config: &UiConfig) -> Self {
        Self {
            operation,
            percent: 0,
            message_index: 0,
            messages,
            emphasized: false,
            completed: false,
            ceiling: config.progress_ceiling.min(100),
            message_step: config.message_step,
        }
    }

    pub fn operation(&self) -> OperationId {
        self.operation
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn message_index(&self) -> usize {
        self.message_index
    }

    pub fn emphasized(&self) -> bool {
        self.emphasized
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Width of the bar in percent. Never above the ceiling until completion.
    pub fn bar_width(&self) -> u8 {
        if self.completed {
            100
        } else {
            self.percent.min(self.ceiling)
        }
    }

    /// `None` when the message list is empty.
    pub fn current_message(&self) -> Option<&StatusMessage> {
        self.messages.get(self.message_index)
    }

    pub fn is_ticking(&self) -> bool {
        !self.completed && self.percent < self.ceiling
    }

    /// Advances the simulation by one tick.
    ///
    /// A tick on a halted or completed simulation changes nothing and asks for
    /// no reschedule.
    pub fn tick(&mut self) -> TickResult {
        if !self.is_ticking() {
            return TickResult {
                message_advanced: false,
                reschedule: false,
            };
        }

        self.percent = self.percent.saturating_add(1);

        let last_index = self.messages.len().saturating_sub(1);
        let on_step = self.message_step > 0 && self.percent % self.message_step == 0;
        let message_advanced = on_step && self.message_index < last_index;
        if message_advanced {
            self.message_index += 1;
            self.emphasized = true;
        }

        TickResult {
            message_advanced,
            reschedule: self.percent < self.ceiling,
        }
    }

    pub fn clear_emphasis(&mut self) {
        self.emphasized = false;
    }

    /// The real operation finished: jump to 100% and stop ticking.
    pub fn complete(&mut self) {
        self.completed = true;
        self.emphasized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{scrape_messages, ProgressState, StatusMessage};
    use crate::UiConfig;

    fn started(messages: Vec<StatusMessage>) -> ProgressState {
        ProgressState::start(1, messages, &UiConfig::default())
    }

    #[test]
    fn percent_tracks_ticks_until_ceiling() {
        let mut state = started(scrape_messages());
        for expected in 1..=95u8 {
            state.tick();
            assert_eq!(state.percent(), expected);
            assert_eq!(state.bar_width(), expected);
        }
        assert!(!state.is_ticking());

        let halted = state.tick();
        assert!(!halted.reschedule);
        assert_eq!(state.percent(), 95);
    }

    #[test]
    fn message_index_moves_only_on_step_multiples() {
        let mut state = started(scrape_messages());
        let mut previous = state.message_index();
        for _ in 0..120 {
            let result = state.tick();
            let index = state.message_index();
            assert!(index <= 6);
            assert!(index - previous <= 1);
            if result.message_advanced {
                assert_eq!(state.percent() % 15, 0);
                assert_eq!(index, previous + 1);
            } else {
                assert_eq!(index, previous);
            }
            previous = index;
        }
        assert_eq!(state.message_index(), 6);
    }

    #[test]
    fn last_tick_does_not_reschedule() {
        let mut state = started(scrape_messages());
        for _ in 0..94 {
            assert!(state.tick().reschedule);
        }
        assert!(!state.tick().reschedule);
    }

    #[test]
    fn short_message_list_never_overruns() {
        let mut state = started(vec![
            StatusMessage::new("one", "first"),
            StatusMessage::new("two", "second"),
        ]);
        for _ in 0..95 {
            state.tick();
        }
        assert_eq!(state.message_index(), 1);
        assert_eq!(state.current_message().map(|m| m.status.as_str()), Some("two"));
    }

    #[test]
    fn empty_message_list_still_moves_the_bar() {
        let mut state = started(Vec::new());
        for _ in 0..30 {
            assert!(!state.tick().message_advanced);
        }
        assert_eq!(state.percent(), 30);
        assert_eq!(state.message_index(), 0);
        assert!(state.current_message().is_none());
    }

    #[test]
    fn completion_jumps_to_full_width() {
        let mut state = started(scrape_messages());
        for _ in 0..10 {
            state.tick();
        }
        state.complete();
        assert_eq!(state.bar_width(), 100);
        assert_eq!(state.percent(), 10);
        assert!(!state.tick().reschedule);
    }
}

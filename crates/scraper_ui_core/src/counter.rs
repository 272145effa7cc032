//! Count-up animation for the statistics shown on the landing page.

use crate::UiConfig;

/// Element box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// True when `rect` lies entirely inside the viewport.
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.top >= 0 && rect.left >= 0 && rect.bottom <= self.height && rect.right <= self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Waiting,
    Running { frame: u64 },
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCounter {
    target: u64,
    phase: Phase,
    displayed: Option<u64>,
}

impl StatCounter {
    pub fn new(target: u64) -> Self {
        Self {
            target,
            phase: Phase::Waiting,
            displayed: None,
        }
    }

    /// Parses a `data-target` value the way the page does: leading integer digits.
    pub fn from_data_target(raw: &str) -> Option<Self> {
        let digits: String = raw
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok().map(Self::new)
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// `None` until the counter has rendered its first frame.
    pub fn displayed(&self) -> Option<u64> {
        self.displayed
    }

    pub fn has_animated(&self) -> bool {
        !matches!(self.phase, Phase::Waiting)
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Starts the animation and renders its first frame immediately.
    /// Returns false if the counter already animated.
    pub fn start(&mut self, config: &UiConfig) -> bool {
        if self.has_animated() {
            return false;
        }
        self.phase = Phase::Running { frame: 0 };
        self.advance(config);
        true
    }

    /// Renders the next frame. Each frame adds `target * frame / duration`;
    /// the floor is shown until the sum reaches the target. A zero frame period
    /// or duration jumps straight to the target.
    pub fn advance(&mut self, config: &UiConfig) {
        let Phase::Running { frame } = self.phase else {
            return;
        };
        let frame = frame + 1;
        let frame_ms = u128::from(config.counter_frame_ms);
        let elapsed = u128::from(frame) * frame_ms;
        let duration = u128::from(config.counter_duration_ms);

        if self.target == 0 || frame_ms == 0 || duration == 0 || elapsed >= duration {
            self.displayed = Some(self.target);
            self.phase = Phase::Done;
            return;
        }

        let value = u128::from(self.target) * elapsed / duration;
        self.displayed = Some(u64::try_from(value).unwrap_or(self.target));
        self.phase = Phase::Running { frame };
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, StatCounter, Viewport};
    use crate::UiConfig;

    #[test]
    fn counts_up_then_lands_on_target() {
        let config = UiConfig::default();
        let mut counter = StatCounter::new(1_000);
        assert!(counter.start(&config));
        assert_eq!(counter.displayed(), Some(10));

        let mut last = 10;
        while counter.is_running() {
            counter.advance(&config);
            let shown = counter.displayed().unwrap();
            assert!(shown >= last);
            last = shown;
        }
        assert_eq!(counter.displayed(), Some(1_000));
        assert!(!counter.start(&config));
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut counter = StatCounter::new(0);
        counter.start(&UiConfig::default());
        assert_eq!(counter.displayed(), Some(0));
        assert!(!counter.is_running());
    }

    #[test]
    fn zero_frame_period_finishes_on_first_frame() {
        let config = UiConfig {
            counter_frame_ms: 0,
            ..UiConfig::default()
        };
        let mut counter = StatCounter::new(100);

        assert!(counter.start(&config));

        assert!(!counter.is_running());
        assert_eq!(counter.displayed(), Some(100));
    }

    #[test]
    fn data_target_parsing_takes_leading_digits() {
        assert_eq!(StatCounter::from_data_target(" 250+ ").map(|c| c.target()), Some(250));
        assert!(StatCounter::from_data_target("many").is_none());
    }

    #[test]
    fn viewport_requires_full_containment() {
        let viewport = Viewport {
            width: 800,
            height: 600,
        };
        let inside = Rect {
            top: 10,
            left: 10,
            bottom: 100,
            right: 200,
        };
        let clipped = Rect {
            bottom: 601,
            ..inside
        };
        assert!(viewport.contains(&inside));
        assert!(!viewport.contains(&clipped));
    }
}

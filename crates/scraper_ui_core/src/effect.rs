use std::time::Duration;

use crate::{NodeId, OperationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `Msg::ProgressTick { operation }` after `after`.
    ScheduleProgressTick {
        operation: OperationId,
        after: Duration,
    },
    /// Deliver `Msg::EmphasisElapsed { operation }` after `after`.
    ScheduleEmphasisClear {
        operation: OperationId,
        after: Duration,
    },
    ScrollIntoView(ScrollRequest),
    SaveThemePreference { dark_mode: bool },
    /// Write `text` to the clipboard, then deliver `ClipboardWritten` or `ClipboardFailed`.
    WriteClipboard { button: usize, text: String },
    ScheduleCopyReset {
        button: usize,
        generation: u64,
        after: Duration,
    },
    /// Deliver `Msg::AnimationFrame` after `after`.
    RequestAnimationFrame { after: Duration },
}

/// Smooth scroll that brings `target` to the vertical center of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: NodeId,
    /// Index of the line holding `target`.
    pub line: Option<usize>,
}

/// Label swapped in after a successful copy.
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyButton {
    label: String,
    payload: Option<String>,
    copied: bool,
    /// Bumped on every successful copy so only the latest reset timer applies.
    generation: u64,
}

impl CopyButton {
    pub fn new(label: impl Into<String>, payload: Option<String>) -> Self {
        Self {
            label: label.into(),
            payload,
            copied: false,
            generation: 0,
        }
    }

    /// The text to copy, if the button carries a non-empty payload.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref().filter(|text| !text.is_empty())
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn label(&self) -> &str {
        if self.copied {
            COPIED_LABEL
        } else {
            &self.label
        }
    }

    pub(crate) fn mark_copied(&mut self) -> u64 {
        self.copied = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Restores the resting label unless a newer copy superseded `generation`.
    pub(crate) fn reset(&mut self, generation: u64) -> bool {
        if !self.copied || generation != self.generation {
            return false;
        }
        self.copied = false;
        true
    }
}

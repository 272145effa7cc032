//! Scraper UI host: timers, clipboard access and markup parsing for the UI core.
mod clipboard;
mod markup;
mod scheduler;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use markup::{
    container_from_document, container_from_fragment, container_from_text, VIEWER_CONTAINER_ID,
};
pub use scheduler::{HostError, Scheduler};

#![deny(missing_docs)]
//! Shared logging utilities for the scraper UI workspace.
//!
//! This crate provides the `ui_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every record is
//! prefixed with the dispatch tick of the thread that emitted it, so log
//! lines from one message dispatch can be grouped together.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the current dispatch tick.
    static DISPATCH_TICK: Cell<u64> = const { Cell::new(0) };
}

/// Sets the dispatch tick for the current thread.
/// The event loop calls this once per dispatched message.
pub fn set_dispatch_tick(tick: u64) {
    DISPATCH_TICK.with(|v| v.set(tick));
}

/// Advances the dispatch tick for the current thread and returns the new value.
pub fn advance_dispatch_tick() -> u64 {
    DISPATCH_TICK.with(|v| {
        let next = v.get().wrapping_add(1);
        v.set(next);
        next
    })
}

/// Retrieves the dispatch tick for the current thread.
/// Returns 0 if the tick has not been set.
pub fn dispatch_tick() -> u64 {
    DISPATCH_TICK.with(|v| v.get())
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! ui_trace {
    ($($arg:tt)*) => {{
        log::trace!("[#{}] {}", $crate::dispatch_tick(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! ui_debug {
    ($($arg:tt)*) => {{
        log::debug!("[#{}] {}", $crate::dispatch_tick(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! ui_info {
    ($($arg:tt)*) => {{
        log::info!("[#{}] {}", $crate::dispatch_tick(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! ui_warn {
    ($($arg:tt)*) => {{
        log::warn!("[#{}] {}", $crate::dispatch_tick(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! ui_error {
    ($($arg:tt)*) => {{
        log::error!("[#{}] {}", $crate::dispatch_tick(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

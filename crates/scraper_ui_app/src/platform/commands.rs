//! One function per CLI subcommand. Each builds a session with the anchors the
//! matching page would have, drives it with messages, and prints the views.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use scraper_ui_core::{
    Anchors, AppViewModel, Key, Msg, ProgressState, Rect, TextContainer, UiConfig, Viewport,
};
use scraper_ui_host::{
    container_from_document, container_from_text, MemoryClipboard, VIEWER_CONTAINER_ID,
};
use ui_logging::{ui_info, ui_warn};

use super::app::UiSession;
use super::persistence::FilePreferenceStore;
use super::ui::constants::{TERMINAL_COLUMNS, TERMINAL_ROWS};
use super::ui::render;

pub struct CommandContext {
    pub config: UiConfig,
    pub state_dir: PathBuf,
}

impl CommandContext {
    fn session(&self, anchors: Anchors) -> anyhow::Result<UiSession> {
        self.session_with_clipboard(anchors, MemoryClipboard::new())
    }

    fn session_with_clipboard(
        &self,
        anchors: Anchors,
        clipboard: MemoryClipboard,
    ) -> anyhow::Result<UiSession> {
        let session = UiSession::new(
            anchors,
            self.config.clone(),
            Box::new(FilePreferenceStore::new(self.state_dir.clone())),
            Arc::new(clipboard),
        )?;
        Ok(session)
    }

    /// How long to wait for a timer before calling the session stuck.
    fn stall_timeout(&self, interval: Duration) -> Duration {
        interval * 4 + Duration::from_secs(1)
    }
}

/// Shows a scraped result file, optionally searched and highlighted.
pub fn view(
    ctx: &CommandContext,
    file: &Path,
    query: Option<&str>,
    matches_only: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("reading result file {}", file.display()))?;

    let anchors = match load_container(file, &raw) {
        Some(container) => Anchors::none().with_search(container, true),
        None => {
            ui_warn!("{:?} has no #{} element; search disabled", file, VIEWER_CONTAINER_ID);
            writeln!(
                out,
                "{} has no #{} element; nothing to show",
                file.display(),
                VIEWER_CONTAINER_ID
            )?;
            return Ok(());
        }
    };
    let mut session = ctx.session(anchors)?;

    if let Some(query) = query {
        session.dispatch(Msg::SearchInputChanged(query.to_string()));
        session.dispatch(Msg::SearchKeyPressed(Key::Enter));
    }

    if let Some(container) = session.state().search_container() {
        for line in render::container_lines(container, matches_only) {
            writeln!(out, "{line}")?;
        }
    }

    let report = session.state().last_search_report().cloned();
    let feedback = session.state().view().search.and_then(|search| search.feedback);
    match (query, report, feedback) {
        (Some(_), Some(report), Some(feedback)) => {
            writeln!(out, "{}", render::feedback_line(&feedback, report.match_count))?;
        }
        (Some(_), None, _) => {
            writeln!(
                out,
                "Search term needs at least {} characters",
                ctx.config.min_query_chars
            )?;
        }
        _ => {}
    }

    if let Some(scroll) = session.take_scroll() {
        writeln!(out, "{}", render::scroll_line(&scroll))?;
    }
    Ok(())
}

fn load_container(file: &Path, raw: &str) -> Option<TextContainer> {
    let is_html = file
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));
    if is_html {
        container_from_document(raw, VIEWER_CONTAINER_ID)
    } else {
        Some(container_from_text(raw))
    }
}

/// Plays the loading overlay until it parks at the ceiling, or until
/// `max_ticks` ticks when the simulated scrape should finish early.
pub fn progress(
    ctx: &CommandContext,
    max_ticks: Option<u32>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut session = ctx.session(Anchors::none().with_progress_overlay())?;
    let timeout = ctx.stall_timeout(ctx.config.tick_interval().max(ctx.config.emphasis_duration()));

    redraw_overlay(session.dispatch(Msg::FormSubmitted), out)?;

    let mut ticks = 0u32;
    while session.state().progress().is_some_and(ProgressState::is_ticking)
        && max_ticks.map_or(true, |max| ticks < max)
    {
        let Some(msg) = session.next_message(timeout) else {
            bail!("progress timer stopped firing");
        };
        if matches!(msg, Msg::ProgressTick { .. }) {
            ticks += 1;
        }
        redraw_overlay(session.dispatch(msg), out)?;
    }

    redraw_overlay(session.dispatch(Msg::OperationFinished), out)?;
    writeln!(out)?;
    session.dispatch(Msg::OverlayDismissed);
    ui_info!("progress finished after {} ticks", ticks);
    Ok(())
}

fn redraw_overlay(view: Option<AppViewModel>, out: &mut dyn Write) -> anyhow::Result<()> {
    if let Some(overlay) = view.and_then(|view| view.overlay) {
        write!(out, "\r{}", render::overlay_line(&overlay))?;
        out.flush()?;
    }
    Ok(())
}

/// Prints the stored theme, flipping and saving it first when `toggle` is set.
pub fn theme(ctx: &CommandContext, toggle: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut session = ctx.session(Anchors::none().with_theme_toggle())?;
    if toggle {
        session.dispatch(Msg::ThemeToggleClicked);
    }
    writeln!(out, "{}", render::theme_line(&session.state().view().theme))?;
    Ok(())
}

pub fn check_url(ctx: &CommandContext, url: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut session = ctx.session(Anchors::none().with_url_input())?;
    session.dispatch(Msg::UrlInputChanged(url.to_string()));
    if let Some(validity) = session.state().view().url_validity {
        writeln!(out, "{}", render::url_line(url, validity))?;
    }
    Ok(())
}

pub fn tooltip(ctx: &CommandContext, mode: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut session = ctx.session(Anchors::none().with_scraper_tooltip())?;
    session.dispatch(Msg::ScraperTypeChanged(mode.to_string()));
    if let Some(text) = session.state().view().tooltip {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

/// Clicks a copy button holding `text` and shows its label until it resets.
pub fn copy(ctx: &CommandContext, text: &str, out: &mut dyn Write) -> anyhow::Result<()> {
    let clipboard = MemoryClipboard::new();
    let anchors = Anchors::none().with_copy_button("Copy", Some(text.to_string()));
    let mut session = ctx.session_with_clipboard(anchors, clipboard.clone())?;
    let timeout = ctx.stall_timeout(ctx.config.copy_reset_delay());

    let initial = session.state().view();
    if let Some(button) = initial.copy_buttons.first() {
        writeln!(out, "{}", render::copy_line(button))?;
    }

    session.dispatch(Msg::CopyClicked { button: 0 });
    loop {
        let Some(msg) = session.next_message(timeout) else {
            break;
        };
        let failed = matches!(msg, Msg::ClipboardFailed { .. });
        if let Some(button) = session
            .dispatch(msg)
            .and_then(|view| view.copy_buttons.into_iter().next())
        {
            writeln!(out, "{}", render::copy_line(&button))?;
            if !button.copied {
                break;
            }
        }
        if failed {
            bail!("clipboard write failed");
        }
    }

    if let Some(latest) = clipboard.latest() {
        writeln!(out, "clipboard: {latest}")?;
    }
    Ok(())
}

/// Counts the given statistics up the way the landing page does once they scroll into view.
pub fn stats(ctx: &CommandContext, targets: &[String], out: &mut dyn Write) -> anyhow::Result<()> {
    let anchors = targets
        .iter()
        .fold(Anchors::none(), |anchors, target| anchors.with_stat_counter(target.clone()));
    let mut session = ctx.session(anchors)?;

    let counters = session.state().view().counters.len();
    if counters == 0 {
        writeln!(out, "no usable counter targets")?;
        return Ok(());
    }

    let positions = (0..counters)
        .map(|row| {
            let row = i32::try_from(row).unwrap_or(i32::MAX).min(TERMINAL_ROWS - 1);
            Rect {
                top: row,
                left: 0,
                bottom: row + 1,
                right: TERMINAL_COLUMNS,
            }
        })
        .collect();
    let viewport = Viewport {
        width: TERMINAL_COLUMNS,
        height: TERMINAL_ROWS,
    };

    let timeout = ctx.stall_timeout(ctx.config.counter_frame());
    let mut view = session.dispatch(Msg::Scrolled { viewport, positions });
    loop {
        if let Some(view) = view.take() {
            write!(out, "\r{}", render::counters_line(&view.counters))?;
            out.flush()?;
        }
        if !session.state().counters_running() {
            break;
        }
        let Some(msg) = session.next_message(timeout) else {
            bail!("animation frames stopped arriving");
        };
        view = session.dispatch(msg);
    }
    writeln!(out)?;
    Ok(())
}

use colored::Colorize;
use scraper_ui_core::{
    CopyButtonView, NodeId, NodeKind, OverlayView, ScrollRequest, TextContainer,
    ThemeView, UrlValidity, HIGHLIGHT_CLASS,
};

use super::constants::*;

pub fn overlay_line(view: &OverlayView) -> String {
    let filled = usize::from(view.bar_width.min(100)) * BAR_CELLS / 100;
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(BAR_CELLS - filled));
    let bar = if view.completed {
        bar.green().to_string()
    } else {
        bar.cyan().to_string()
    };
    let status = if view.emphasized {
        view.status.bold().to_string()
    } else {
        view.status.clone()
    };

    format!(
        "[{}] {:>3}%  {} | {}",
        bar,
        view.bar_width,
        status,
        view.detail.dimmed()
    )
}

/// One terminal line per container line, numbered from 1, with highlights painted.
pub fn container_lines(container: &TextContainer, matches_only: bool) -> Vec<String> {
    let lines = container.lines();
    let gutter = lines.len().to_string().len().max(GUTTER_WIDTH);

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !matches_only || has_highlight(container, **line))
        .map(|(index, line)| {
            let mut text = String::new();
            paint_children(container, *line, &mut text);
            format!(
                "{} | {}",
                format!("{:>gutter$}", index + 1).dimmed(),
                text
            )
        })
        .collect()
}

fn has_highlight(container: &TextContainer, line: NodeId) -> bool {
    container
        .descendants(line)
        .into_iter()
        .any(|node| container.has_class(node, HIGHLIGHT_CLASS))
}

fn paint_children(container: &TextContainer, parent: NodeId, out: &mut String) {
    for child in container.children(parent) {
        match container.kind(*child) {
            Some(NodeKind::Text(text)) => out.push_str(text),
            Some(NodeKind::Element { .. }) if container.has_class(*child, HIGHLIGHT_CLASS) => {
                let inner = container.text_content(*child);
                out.push_str(&inner.black().on_yellow().to_string());
            }
            Some(NodeKind::Element { .. }) => paint_children(container, *child, out),
            None => {}
        }
    }
}

pub fn feedback_line(feedback: &str, match_count: usize) -> String {
    if match_count > 0 {
        feedback.green().to_string()
    } else {
        feedback.red().to_string()
    }
}

pub fn scroll_line(request: &ScrollRequest) -> String {
    match request.line {
        Some(line) => format!("-> line {} (center)", line + 1),
        None => "-> first match (center)".to_string(),
    }
}

pub fn url_line(input: &str, validity: UrlValidity) -> String {
    match validity {
        UrlValidity::Valid => format!("{} {}", input, "valid".green()),
        UrlValidity::Invalid => format!("{} {}", input, "invalid".red()),
        UrlValidity::Neutral => format!("{} {}", input, "empty".dimmed()),
    }
}

pub fn theme_line(view: &ThemeView) -> String {
    let mode = if view.dark_mode { "dark" } else { "light" };
    match view.toggle {
        Some(toggle) => format!(
            "Theme: {} (sun {}%, moon {}%)",
            mode.bold(),
            toggle.sun_opacity,
            toggle.moon_opacity
        ),
        None => format!("Theme: {}", mode.bold()),
    }
}

pub fn copy_line(view: &CopyButtonView) -> String {
    if view.copied {
        format!("[{}]", view.label.green())
    } else {
        format!("[{}]", view.label)
    }
}

pub fn counters_line(values: &[Option<u64>]) -> String {
    values
        .iter()
        .map(|value| match value {
            Some(value) => value.to_string().bold().to_string(),
            None => "-".to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

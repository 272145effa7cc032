//! Case-insensitive literal search over a [`TextContainer`], wrapping every
//! occurrence in a highlight span.

use regex::{Regex, RegexBuilder};
use ui_logging::{ui_debug, ui_warn};

use crate::document::{NodeId, NodeKind, TextContainer};

pub const HIGHLIGHT_TAG: &str = "span";
pub const HIGHLIGHT_CLASS: &str = "highlight";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Normalised query is shorter than the configured minimum.
    QueryTooShort,
    /// The escaped pattern could not be compiled (only possible for huge queries).
    UnusableQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Lines containing at least one occurrence. This is the unit shown to the user.
    pub match_count: usize,
    /// Wrapped occurrences across all lines.
    pub occurrence_count: usize,
    pub first_highlight: Option<NodeId>,
}

impl SearchReport {
    pub fn feedback_text(&self) -> String {
        feedback_text(self.match_count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Skipped(SkipReason),
    Completed(SearchReport),
}

pub fn feedback_text(match_count: usize) -> String {
    if match_count > 0 {
        format!("Found {match_count} matches")
    } else {
        "No matches found".to_string()
    }
}

/// A normalised query plus its literal, case-insensitive matcher.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    needle: String,
    pattern: Regex,
}

impl SearchQuery {
    /// Trims and lower-cases `raw`; rejects queries under `min_chars` characters.
    pub fn parse(raw: &str, min_chars: usize) -> Result<Self, SkipReason> {
        let needle = raw.trim().to_lowercase();
        if needle.chars().count() < min_chars || needle.is_empty() {
            return Err(SkipReason::QueryTooShort);
        }
        let pattern = RegexBuilder::new(&regex::escape(&needle))
            .case_insensitive(true)
            .build()
            .map_err(|err| {
                ui_warn!("search pattern rejected: {}", err);
                SkipReason::UnusableQuery
            })?;
        Ok(Self { needle, pattern })
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    fn line_matches(&self, line_text: &str) -> bool {
        line_text.to_lowercase().contains(&self.needle)
    }
}

/// Runs one search over `container`.
///
/// Prior highlights are always unwrapped first, so the visible text is the same
/// before and after. Too-short queries leave the container untouched.
pub fn search(container: &mut TextContainer, raw_query: &str, min_chars: usize) -> SearchOutcome {
    let query = match SearchQuery::parse(raw_query, min_chars) {
        Ok(query) => query,
        Err(reason) => {
            ui_debug!("search skipped: {:?}", reason);
            return SearchOutcome::Skipped(reason);
        }
    };

    clear_highlights(container);

    let mut report = SearchReport {
        match_count: 0,
        occurrence_count: 0,
        first_highlight: None,
    };

    for line in container.lines() {
        if !query.line_matches(&container.text_content(line)) {
            continue;
        }
        report.match_count += 1;

        let (wrapped, first) = highlight_line(container, line, &query);
        report.occurrence_count += wrapped;
        if report.first_highlight.is_none() {
            report.first_highlight = first;
        }
    }

    ui_debug!(
        "search {:?}: {} lines, {} occurrences",
        query.needle(),
        report.match_count,
        report.occurrence_count
    );
    SearchOutcome::Completed(report)
}

/// Unwraps every highlight span, merging the text it split back together, and
/// compacts the arena so repeated searches do not accumulate dead nodes.
/// Returns the number of wrappers removed.
pub fn clear_highlights(container: &mut TextContainer) -> usize {
    let wrappers = container.elements_with_class(HIGHLIGHT_CLASS);
    let mut parents: Vec<NodeId> = Vec::new();
    for wrapper in &wrappers {
        if let Some(parent) = container.unwrap_element(*wrapper) {
            parents.push(parent);
        }
    }
    parents.sort();
    parents.dedup();
    for parent in parents {
        // A parent can itself have been an unwrapped highlight; merging a
        // detached node is harmless.
        container.merge_adjacent_text(parent);
    }
    if !wrappers.is_empty() {
        container.compact();
    }
    wrappers.len()
}

fn highlight_line(
    container: &mut TextContainer,
    line: NodeId,
    query: &SearchQuery,
) -> (usize, Option<NodeId>) {
    let text_nodes: Vec<(NodeId, String)> = container
        .descendants(line)
        .into_iter()
        .filter_map(|id| match container.kind(id) {
            Some(NodeKind::Text(text)) => Some((id, text.clone())),
            _ => None,
        })
        .collect();

    let mut wrapped = 0;
    let mut first = None;
    for (node, text) in text_nodes {
        let ranges: Vec<(usize, usize)> = query
            .pattern
            .find_iter(&text)
            .map(|m| (m.start(), m.end()))
            .filter(|(start, end)| end > start)
            .collect();
        if ranges.is_empty() {
            continue;
        }

        let mut replacements = Vec::with_capacity(ranges.len() * 2 + 1);
        let mut cursor = 0;
        for (start, end) in ranges {
            if let Some(before) = text.get(cursor..start).filter(|s| !s.is_empty()) {
                replacements.push(container.create_detached_text(before));
            }
            let span = container.create_detached_element(HIGHLIGHT_TAG, &[HIGHLIGHT_CLASS]);
            let matched = text.get(start..end).unwrap_or_default();
            let inner = container.create_detached_text(matched);
            container.attach(span, inner);
            replacements.push(span);
            if first.is_none() {
                first = Some(span);
            }
            wrapped += 1;
            cursor = end;
        }
        if let Some(after) = text.get(cursor..).filter(|s| !s.is_empty()) {
            replacements.push(container.create_detached_text(after));
        }
        container.replace_with_nodes(node, &replacements);
    }
    (wrapped, first)
}

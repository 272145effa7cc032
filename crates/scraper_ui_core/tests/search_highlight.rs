use std::sync::Once;

use pretty_assertions::assert_eq;
use scraper_ui_core::{
    clear_highlights, search, SearchOutcome, SearchReport, SkipReason, TextContainer,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

fn fox_container() -> TextContainer {
    TextContainer::from_lines(["The fox jumps", "Over the FOX", "Nothing here"])
}

fn completed(outcome: SearchOutcome) -> SearchReport {
    match outcome {
        SearchOutcome::Completed(report) => report,
        SearchOutcome::Skipped(reason) => panic!("search skipped: {reason:?}"),
    }
}

#[test]
fn fox_scenario_counts_lines_and_wraps_every_case() {
    init_logging();
    let mut container = fox_container();

    let report = completed(search(&mut container, "fox", 2));

    assert_eq!(report.match_count, 2);
    assert_eq!(report.occurrence_count, 2);
    assert_eq!(report.feedback_text(), "Found 2 matches");
    assert_eq!(
        container.markup(),
        "<div>The <span class=\"highlight\">fox</span> jumps</div>\
         <div>Over the <span class=\"highlight\">FOX</span></div>\
         <div>Nothing here</div>"
    );
}

#[test]
fn several_occurrences_in_one_line_count_once() {
    init_logging();
    let mut container = TextContainer::from_lines(["fox FOX Fox", "no"]);

    let report = completed(search(&mut container, "  FoX ", 2));

    assert_eq!(report.match_count, 1);
    assert_eq!(report.occurrence_count, 3);
    assert_eq!(container.elements_with_class("highlight").len(), 3);
    assert_eq!(container.text_content(container.root()), "fox FOX Foxno");
}

#[test]
fn no_match_inserts_nothing() {
    init_logging();
    let mut container = fox_container();
    let before = container.markup();

    let report = completed(search(&mut container, "zzz", 2));

    assert_eq!(report.match_count, 0);
    assert_eq!(report.first_highlight, None);
    assert_eq!(report.feedback_text(), "No matches found");
    assert_eq!(container.markup(), before);
}

#[test]
fn short_query_leaves_markup_untouched() {
    init_logging();
    let mut container = fox_container();
    completed(search(&mut container, "fox", 2));
    let highlighted = container.markup();

    for query in ["", " ", "f", "  x  "] {
        assert_eq!(
            search(&mut container, query, 2),
            SearchOutcome::Skipped(SkipReason::QueryTooShort)
        );
        assert_eq!(container.markup(), highlighted);
    }
}

#[test]
fn repeated_search_does_not_nest_highlights() {
    init_logging();
    let mut once = fox_container();
    completed(search(&mut once, "foo", 2));
    completed(search(&mut once, "fox", 2));

    let mut twice = fox_container();
    completed(search(&mut twice, "fox", 2));
    completed(search(&mut twice, "fox", 2));

    assert_eq!(twice.markup(), once.markup());
    assert_eq!(twice.elements_with_class("highlight").len(), 2);
}

#[test]
fn repeated_searches_reuse_the_same_arena() {
    let mut once = fox_container();
    let first = completed(search(&mut once, "fox", 2));

    let mut repeated = fox_container();
    let mut last = None;
    for _ in 0..200 {
        last = Some(completed(search(&mut repeated, "fox", 2)));
    }

    assert_eq!(repeated.node_count(), once.node_count());
    assert_eq!(last.and_then(|r| r.first_highlight), first.first_highlight);
    assert_eq!(repeated, once);
}

#[test]
fn clearing_highlights_restores_the_unsearched_container() {
    let mut container = fox_container();
    completed(search(&mut container, "fox", 2));

    assert_eq!(clear_highlights(&mut container), 2);

    assert_eq!(container, fox_container());
}

#[test]
fn new_query_replaces_previous_highlights() {
    init_logging();
    let mut container = fox_container();
    completed(search(&mut container, "fox", 2));

    let report = completed(search(&mut container, "the", 2));

    assert_eq!(report.match_count, 2);
    assert_eq!(
        container.markup(),
        "<div><span class=\"highlight\">The</span> fox jumps</div>\
         <div>Over <span class=\"highlight\">the</span> FOX</div>\
         <div>Nothing here</div>"
    );
}

#[test]
fn pattern_characters_match_literally() {
    init_logging();
    let mut container = TextContainer::from_lines(["a.b here", "axb there", "(a+b)*c", "[x]"]);

    let dot = completed(search(&mut container, "a.b", 2));
    assert_eq!(dot.match_count, 1);
    assert_eq!(container.text_content(container.lines()[1]), "axb there");
    assert!(container.elements_with_class("highlight").len() == 1);

    let group = completed(search(&mut container, "(a+b)*", 2));
    assert_eq!(group.match_count, 1);

    let class = completed(search(&mut container, "[x]", 2));
    assert_eq!(class.match_count, 1);
    assert_eq!(
        container.inner_markup(container.lines()[3]),
        "<span class=\"highlight\">[x]</span>"
    );
}

#[test]
fn first_highlight_is_in_the_first_matching_line() {
    init_logging();
    let mut container = TextContainer::from_lines(["nothing", "second fox", "third fox"]);

    let report = completed(search(&mut container, "fox", 2));
    let first = report.first_highlight.expect("first highlight");

    let line = container.line_of(first).expect("line");
    assert_eq!(container.line_index(line), Some(1));
    assert_eq!(container.text_content(first), "fox");
}

#[test]
fn highlights_inside_nested_markup_keep_structure() {
    init_logging();
    let mut container = TextContainer::new();
    let line = container.append_element(container.root(), "div", &["line"]);
    container.append_text(line, "see ");
    let bold = container.append_element(line, "b", &[]);
    container.append_text(bold, "bold fox");
    container.append_text(line, " and fox");

    let report = completed(search(&mut container, "fox", 2));

    assert_eq!(report.match_count, 1);
    assert_eq!(report.occurrence_count, 2);
    assert_eq!(
        container.markup(),
        "<div class=\"line\">see <b>bold <span class=\"highlight\">fox</span></b> and \
         <span class=\"highlight\">fox</span></div>"
    );

    assert_eq!(clear_highlights(&mut container), 2);
    assert_eq!(
        container.markup(),
        "<div class=\"line\">see <b>bold fox</b> and fox</div>"
    );
}

#[test]
fn occurrence_split_by_markup_still_counts_its_line() {
    init_logging();
    let mut container = TextContainer::new();
    let line = container.append_element(container.root(), "div", &[]);
    container.append_text(line, "f");
    let italic = container.append_element(line, "i", &[]);
    container.append_text(italic, "ox");

    let report = completed(search(&mut container, "fox", 2));

    assert_eq!(report.match_count, 1);
    assert_eq!(report.occurrence_count, 0);
    assert_eq!(report.first_highlight, None);
}

#[test]
fn text_that_looks_like_markup_is_escaped() {
    init_logging();
    let mut container = TextContainer::from_lines(["<div> & fox"]);

    completed(search(&mut container, "div", 2));

    assert_eq!(
        container.markup(),
        "<div>&lt;<span class=\"highlight\">div</span>&gt; &amp; fox</div>"
    );
}

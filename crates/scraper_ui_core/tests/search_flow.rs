use scraper_ui_core::{
    update, Anchors, AppState, Effect, Key, Msg, ScrollRequest, TextContainer, UiConfig,
};

fn search_state(feedback: bool) -> AppState {
    let container = TextContainer::from_lines(["The fox jumps", "Over the FOX", "Nothing here"]);
    AppState::new(
        Anchors::none().with_search(container, feedback),
        UiConfig::default(),
        false,
    )
}

fn type_query(state: AppState, query: &str) -> AppState {
    update(state, Msg::SearchInputChanged(query.to_string())).0
}

#[test]
fn enter_runs_search_and_scrolls_to_first_match() {
    let state = type_query(search_state(true), "fox");

    let (mut state, effects) = update(state, Msg::SearchKeyPressed(Key::Enter));

    let view = state.view().search.expect("search view");
    assert_eq!(view.feedback.as_deref(), Some("Found 2 matches"));
    assert_eq!(view.match_count, Some(2));
    assert_eq!(effects.len(), 1);
    match &effects[0] {
        Effect::ScrollIntoView(ScrollRequest { line, .. }) => assert_eq!(*line, Some(0)),
        other => panic!("unexpected effect {other:?}"),
    }
    assert!(state.consume_dirty());
}

#[test]
fn button_and_enter_produce_identical_results() {
    let by_key = update(type_query(search_state(true), "fox"), Msg::SearchKeyPressed(Key::Enter));
    let by_click = update(type_query(search_state(true), "fox"), Msg::SearchClicked);

    assert_eq!(by_key.0.view(), by_click.0.view());
    assert_eq!(by_key.1, by_click.1);
}

#[test]
fn other_keys_do_not_search() {
    let state = type_query(search_state(true), "fox");
    let before = state.view();

    let (next, effects) = update(state, Msg::SearchKeyPressed(Key::Other));

    assert!(effects.is_empty());
    assert_eq!(next.view(), before);
}

#[test]
fn repeated_searches_leave_state_equal_to_a_single_search() {
    let (once, once_effects) = update(type_query(search_state(true), "fox"), Msg::SearchClicked);

    let mut state = type_query(search_state(true), "fox");
    let mut effects = Vec::new();
    for _ in 0..50 {
        (state, effects) = update(state, Msg::SearchClicked);
    }

    assert_eq!(effects, once_effects);
    assert_eq!(state, once);
}

#[test]
fn no_matches_reports_without_scrolling() {
    let state = type_query(search_state(true), "zzz");

    let (state, effects) = update(state, Msg::SearchClicked);

    assert!(effects.is_empty());
    let view = state.view().search.expect("search view");
    assert_eq!(view.feedback.as_deref(), Some("No matches found"));
    assert!(!view.markup.contains("highlight"));
}

#[test]
fn short_query_keeps_previous_feedback_and_markup() {
    let state = type_query(search_state(true), "fox");
    let (mut state, _) = update(state, Msg::SearchClicked);
    assert!(state.consume_dirty());
    let before = state.view();

    let state = type_query(state, "f");
    let (mut state, effects) = update(state, Msg::SearchClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().search, before.search);
    assert!(!state.consume_dirty());
}

#[test]
fn missing_feedback_still_highlights_and_scrolls() {
    let state = type_query(search_state(false), "fox");

    let (state, effects) = update(state, Msg::SearchClicked);

    let view = state.view().search.expect("search view");
    assert_eq!(view.feedback, None);
    assert_eq!(view.match_count, Some(2));
    assert!(matches!(effects.as_slice(), [Effect::ScrollIntoView(_)]));
}

#[test]
fn search_without_container_is_noop() {
    let state = AppState::new(Anchors::none(), UiConfig::default(), false);
    let state = type_query(state, "fox");

    let (state, effects) = update(state, Msg::SearchClicked);

    assert!(effects.is_empty());
    assert!(state.view().search.is_none());
}

#[test]
fn min_query_length_comes_from_config() {
    let container = TextContainer::from_lines(["a fox"]);
    let config = UiConfig {
        min_query_chars: 1,
        ..UiConfig::default()
    };
    let state = AppState::new(Anchors::none().with_search(container, true), config, false);
    let state = type_query(state, "a");

    let (state, _) = update(state, Msg::SearchClicked);

    assert_eq!(state.last_search_report().map(|r| r.match_count), Some(1));
}

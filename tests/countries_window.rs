use userdeck::config::WindowConfig;
use userdeck::ui::countries::{CountriesIntent, CountriesReducer, CountriesState, ScrollTracker};
use userdeck::ui::mvi::Reducer;

mod common;

/// Every reachable window for lists of `len` items, walking forward then back.
fn walk(len: usize, range: usize, step: usize) -> Vec<CountriesState> {
    let mut state = CountriesReducer::reduce(
        CountriesState::with_window(WindowConfig { range, step }),
        CountriesIntent::SetDisplayData {
            countries: common::countries(len),
        },
    );
    let mut seen = vec![state.clone()];
    for intent in [CountriesIntent::LoadNextItems, CountriesIntent::LoadPrevItems] {
        for _ in 0..(len / step + 2) {
            state = CountriesReducer::reduce(state, intent.clone());
            seen.push(state.clone());
        }
    }
    seen
}

fn assert_window_invariant(state: &CountriesState) {
    assert!(state.min <= state.max, "{}..={}", state.min, state.max);
    if !state.is_empty() {
        assert!(state.max <= state.len() - 1);
        assert!(state.max - state.min < state.range);
    }
}

#[test]
fn load_next_never_passes_the_end_nor_moves_back() {
    for len in [0, 1, 14, 59, 60, 61, 75, 100, 250] {
        for state in walk(len, 60, 15) {
            assert_window_invariant(&state);
            let next = CountriesReducer::reduce(state.clone(), CountriesIntent::LoadNextItems);
            assert_window_invariant(&next);
            assert!(next.max >= state.max);
            if len > 0 {
                assert!(next.max <= len - 1);
            }
        }
    }
}

#[test]
fn load_prev_never_passes_the_start_nor_moves_forward() {
    for len in [0, 1, 59, 60, 61, 100, 250] {
        for state in walk(len, 60, 15) {
            let prev = CountriesReducer::reduce(state.clone(), CountriesIntent::LoadPrevItems);
            assert_window_invariant(&prev);
            assert!(prev.min <= state.min);
        }
    }
}

#[test]
fn load_next_at_final_window_is_idempotent() {
    let mut state = common::loaded_window(250);
    while !state.at_end() {
        state = CountriesReducer::reduce(state, CountriesIntent::LoadNextItems);
    }
    assert_eq!((state.min, state.max), (190, 249));
    let again = CountriesReducer::reduce(state.clone(), CountriesIntent::LoadNextItems);
    assert_eq!(again, state);
}

#[test]
fn other_window_sizes_hold_invariants() {
    for (range, step) in [(1, 1), (5, 2), (10, 15), (30, 30)] {
        for state in walk(47, range, step) {
            assert_window_invariant(&state);
        }
    }
}

#[test]
fn scrolling_past_bottom_threshold_advances_window() {
    let state = common::loaded_window(250);
    assert_eq!((state.min, state.max), (0, 59));
    assert_eq!(state.visible().len(), 60);
    assert_eq!(state.visible()[0].name, "Country 0");
    assert_eq!(state.visible()[59].name, "Country 59");

    let viewport = 20;
    let mut tracker = ScrollTracker::default();
    // scrollable height 40; 84% of it is 33.6
    let intent = tracker
        .scroll_by(34, viewport, &state)
        .expect("threshold crossed");
    let state = tracker.safe_dispatch(state, intent, viewport);

    assert_eq!((state.min, state.max), (15, 74));
    assert!(state.max <= 249);
    assert_eq!(state.visible()[tracker.offset()].name, "Country 34");
}

#[test]
fn scrolling_to_the_bottom_stops_at_last_country() {
    let viewport = 20;
    let mut state = common::loaded_window(250);
    let mut tracker = ScrollTracker::default();
    for _ in 0..500 {
        if let Some(intent) = tracker.scroll_by(1, viewport, &state) {
            state = tracker.safe_dispatch(state, intent, viewport);
        }
    }
    assert_eq!(state.max, 249);
    assert_eq!(state.visible().last().unwrap().name, "Country 249");

    for _ in 0..500 {
        if let Some(intent) = tracker.scroll_by(-1, viewport, &state) {
            state = tracker.safe_dispatch(state, intent, viewport);
        }
    }
    assert_eq!(state.min, 0);
    assert_eq!(tracker.offset(), 0);
}

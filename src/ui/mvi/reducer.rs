use super::intent::Intent;
use super::state::UiState;

/// Folds an intent into a new state.
///
/// Reducers are pure: fetching, caching and scrolling the viewport happen in
/// the caller around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

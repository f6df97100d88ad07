use crate::api::Status;
use crate::ui::mvi::Reducer;

use super::intent::CountriesIntent;
use super::state::CountriesState;

/// Scroll-window reducer.
///
/// Next/prev shifts move the window by `step`, clamping to the final or the
/// first `range`-sized window at the ends of the list.
pub struct CountriesReducer;

impl Reducer for CountriesReducer {
    type State = CountriesState;
    type Intent = CountriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CountriesIntent::SetDisplayData { countries } => {
                let max = state.range.min(countries.len()).saturating_sub(1);
                CountriesState {
                    countries: Some(countries),
                    min: 0,
                    max,
                    status: Status::Resolved,
                    error: None,
                    ..state
                }
            }
            CountriesIntent::LoadNextItems => {
                if state.countries.is_none() || state.at_end() {
                    return state;
                }
                let last = state.len() - 1;
                let max = (state.max + state.step).min(last);
                let min = (max + 1).saturating_sub(state.range);
                CountriesState { min, max, ..state }
            }
            CountriesIntent::LoadPrevItems => {
                if state.countries.is_none() || state.at_start() {
                    return state;
                }
                let last = state.len().saturating_sub(1);
                let min = state.min.saturating_sub(state.step);
                let max = (min + state.range - 1).min(last);
                CountriesState { min, max, ..state }
            }
            CountriesIntent::FetchStarted => CountriesState {
                status: Status::Pending,
                error: None,
                ..state
            },
            CountriesIntent::FetchFailed { error } => CountriesState {
                status: Status::Rejected,
                error: Some(error),
                ..state
            },
        }
    }
}

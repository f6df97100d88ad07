use crate::api::AppResponse;
use crate::ui::mvi::Reducer;

use super::intent::CardsIntent;
use super::state::CardsState;

pub struct CardsReducer;

impl Reducer for CardsReducer {
    type State = CardsState;
    type Intent = CardsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CardsIntent::Requested => {
                if state.response.is_resolved() {
                    return state;
                }
                CardsState {
                    response: AppResponse::pending(),
                }
            }
            CardsIntent::Loaded { response } => CardsState { response },
        }
    }
}

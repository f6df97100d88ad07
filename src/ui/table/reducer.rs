use crate::api::Status;
use crate::ui::mvi::Reducer;

use super::intent::TableIntent;
use super::state::{TableState, FIRST_PAGE, LAST_PAGE, PAGE_INPUT_MAX_LEN};

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if !state.accepts(&intent) {
            return state;
        }

        let page = state.page;
        match intent {
            TableIntent::FirstPage => go_to(state, FIRST_PAGE),
            TableIntent::PreviousPage => go_to(state, page - 1),
            TableIntent::NextPage => go_to(state, page + 1),
            TableIntent::LastPage => go_to(state, LAST_PAGE),
            // Not checked against the size of the result set.
            TableIntent::SpecificPage { page } => go_to(state, page),
            TableIntent::VisitedPreviousPage => match state.previous_visited_page {
                Some(previous) => TableState {
                    next_visited_page: Some(page),
                    page: previous,
                    page_input: previous.to_string(),
                    ..state
                },
                None => state,
            },
            TableIntent::VisitedNextPage => match state.next_visited_page {
                Some(next) => TableState {
                    page: next,
                    page_input: next.to_string(),
                    ..state
                },
                None => state,
            },
            TableIntent::Promise { response } => match response.status {
                Status::Resolved => TableState {
                    status: Status::Resolved,
                    page_data: response.data,
                    error: None,
                    ..state
                },
                // Stale page data stays on screen next to the error.
                Status::Rejected => TableState {
                    status: Status::Rejected,
                    error: response.error,
                    ..state
                },
                status => TableState { status, ..state },
            },
            TableIntent::InputDigit(ch) => {
                let mut state = state;
                if ch.is_ascii_digit() {
                    if state.page_input == "0" {
                        state.page_input.clear();
                    }
                    if state.page_input.len() < PAGE_INPUT_MAX_LEN {
                        state.page_input.push(ch);
                    }
                }
                state
            }
            TableIntent::InputBackspace => {
                let mut state = state;
                state.page_input.pop();
                state
            }
        }
    }
}

fn go_to(state: TableState, page: u32) -> TableState {
    TableState {
        previous_visited_page: Some(state.page),
        page,
        page_input: page.to_string(),
        ..state
    }
}

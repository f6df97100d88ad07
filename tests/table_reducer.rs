use userdeck::api::{ApiError, AppResponse, Status};
use userdeck::ui::mvi::Reducer;
use userdeck::ui::table::{TableIntent, TableReducer, TableState, LAST_PAGE};

mod common;

fn at_page(page: u32) -> TableState {
    TableState {
        page,
        page_input: page.to_string(),
        ..TableState::default()
    }
}

fn reduce_all(state: TableState, intents: Vec<TableIntent>) -> TableState {
    intents
        .into_iter()
        .fold(state, |state, intent| TableReducer::reduce(state, intent))
}

#[test]
fn initial_state_is_first_page_without_pointers() {
    let state = TableState::default();
    assert_eq!(state.page, 0);
    assert_eq!(state.previous_visited_page, None);
    assert_eq!(state.next_visited_page, None);
    assert_eq!(state.status, Status::Idle);
    assert_eq!(state.page_input, "0");
}

#[test]
fn next_then_visited_previous_restores_page() {
    for start in [0, 1, 17, 500, LAST_PAGE - 1] {
        let state = reduce_all(
            at_page(start),
            vec![TableIntent::NextPage, TableIntent::VisitedPreviousPage],
        );
        assert_eq!(state.page, start, "start page {start}");
        assert_eq!(state.next_visited_page, Some(start + 1));
    }
}

#[test]
fn visited_next_undoes_visited_previous() {
    let state = reduce_all(
        at_page(4),
        vec![
            TableIntent::NextPage,
            TableIntent::VisitedPreviousPage,
            TableIntent::VisitedNextPage,
        ],
    );
    assert_eq!(state.page, 5);
    assert_eq!(state.page_input, "5");
}

#[test]
fn next_page_is_disabled_on_last_page() {
    let state = TableReducer::reduce(TableState::default(), TableIntent::LastPage);
    assert_eq!(state.page, LAST_PAGE);
    assert!(!state.accepts(&TableIntent::NextPage));

    let after = TableReducer::reduce(state.clone(), TableIntent::NextPage);
    assert_eq!(after.page, LAST_PAGE);
    assert_eq!(after, state);
}

#[test]
fn navigation_records_previous_page() {
    let state = reduce_all(
        TableState::default(),
        vec![TableIntent::NextPage, TableIntent::NextPage, TableIntent::PreviousPage],
    );
    assert_eq!(state.page, 1);
    assert_eq!(state.previous_visited_page, Some(2));
}

#[test]
fn first_page_jumps_to_zero() {
    let state = TableReducer::reduce(at_page(42), TableIntent::FirstPage);
    assert_eq!(state.page, 0);
    assert_eq!(state.previous_visited_page, Some(42));
    assert_eq!(state.page_input, "0");
}

#[test]
fn specific_page_is_not_bounded_by_result_size() {
    let mut state = at_page(0);
    state.page_data = Some(common::user_page(0, 5));
    let state = TableReducer::reduce(state, TableIntent::SpecificPage { page: 900 });
    assert_eq!(state.page, 900);
    assert_eq!(state.previous_visited_page, Some(0));
}

#[test]
fn visited_shortcuts_are_disabled_until_set() {
    let state = TableState::default();
    assert!(!state.accepts(&TableIntent::VisitedPreviousPage));
    assert!(!state.accepts(&TableIntent::VisitedNextPage));
    assert_eq!(
        TableReducer::reduce(state.clone(), TableIntent::VisitedNextPage),
        state
    );
}

#[test]
fn resolved_promise_replaces_page_data() {
    let state = TableReducer::reduce(
        TableState::default(),
        TableIntent::Promise {
            response: AppResponse::resolved(common::user_page(0, 5)),
        },
    );
    assert_eq!(state.status, Status::Resolved);
    assert_eq!(state.page_data.as_ref().map(|p| p.data.len()), Some(5));
    assert!(state.error.is_none());
}

#[test]
fn rejected_promise_keeps_stale_page_data() {
    let loaded = TableReducer::reduce(
        TableState::default(),
        TableIntent::Promise {
            response: AppResponse::resolved(common::user_page(0, 5)),
        },
    );
    let failed = reduce_all(
        loaded.clone(),
        vec![
            TableIntent::NextPage,
            TableIntent::Promise {
                response: AppResponse::pending(),
            },
            TableIntent::Promise {
                response: AppResponse::rejected(ApiError::Status {
                    status: 500,
                    body: "oops".into(),
                }),
            },
        ],
    );
    assert_eq!(failed.status, Status::Rejected);
    assert_eq!(failed.page, 1);
    assert_eq!(failed.page_data, loaded.page_data);
    assert!(failed.error_text().unwrap().contains("500"));
}

#[test]
fn pending_promise_only_updates_status() {
    let state = TableReducer::reduce(
        at_page(3),
        TableIntent::Promise {
            response: AppResponse::pending(),
        },
    );
    assert_eq!(state.status, Status::Pending);
    assert_eq!(state.page, 3);
}

use crate::api::{ErrorBody, Status, UserPage};
use crate::ui::mvi::UiState;

use super::intent::TableIntent;

pub const FIRST_PAGE: u32 = 0;
pub const LAST_PAGE: u32 = 999;
/// The page field holds at most three digits, so it never exceeds `LAST_PAGE`.
pub const PAGE_INPUT_MAX_LEN: usize = 3;

/// Paginated table with one-step back/forward shortcuts.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub page_data: Option<UserPage>,
    pub page: u32,
    pub previous_visited_page: Option<u32>,
    pub next_visited_page: Option<u32>,
    pub status: Status,
    pub error: Option<ErrorBody>,
    /// Contents of the page-number field.
    pub page_input: String,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page_data: None,
            page: FIRST_PAGE,
            previous_visited_page: None,
            next_visited_page: None,
            status: Status::Idle,
            error: None,
            page_input: FIRST_PAGE.to_string(),
        }
    }
}

impl UiState for TableState {}

impl TableState {
    /// Whether the control behind `intent` is enabled.
    ///
    /// Disabled controls produce no transition and no fetch.
    pub fn accepts(&self, intent: &TableIntent) -> bool {
        match intent {
            TableIntent::FirstPage | TableIntent::PreviousPage => self.page != FIRST_PAGE,
            TableIntent::NextPage | TableIntent::LastPage => self.page < LAST_PAGE,
            TableIntent::VisitedPreviousPage => self.previous_visited_page.is_some(),
            TableIntent::VisitedNextPage => self.next_visited_page.is_some(),
            TableIntent::SpecificPage { .. }
            | TableIntent::Promise { .. }
            | TableIntent::InputDigit(_)
            | TableIntent::InputBackspace => true,
        }
    }

    /// Page typed into the field, if it parses.
    pub fn requested_page(&self) -> Option<u32> {
        self.page_input.parse().ok()
    }

    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(ErrorBody::to_json)
    }
}

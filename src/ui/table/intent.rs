use crate::api::{AppResponse, UserPage};
use crate::ui::mvi::Intent;

/// Intents handled by the table pagination reducer.
#[derive(Debug, Clone)]
pub enum TableIntent {
    FirstPage,
    /// One page back. Ignored on the first page.
    PreviousPage,
    /// One page forward. Ignored on the last page.
    NextPage,
    LastPage,
    /// Jump to a page typed by the user.
    SpecificPage { page: u32 },
    /// Return to the page we navigated away from.
    VisitedPreviousPage,
    /// Undo the last `VisitedPreviousPage`.
    VisitedNextPage,
    /// A page fetch changed state.
    Promise { response: AppResponse<UserPage> },
    InputDigit(char),
    InputBackspace,
}

impl TableIntent {
    /// Intents after which the shell fetches the current page.
    pub fn is_navigation(&self) -> bool {
        !matches!(
            self,
            TableIntent::Promise { .. } | TableIntent::InputDigit(_) | TableIntent::InputBackspace
        )
    }
}

impl Intent for TableIntent {}

use crate::api::{AppResponse, UserPage, UserRecord};
use crate::ui::mvi::UiState;

/// Card strip: one page of users, fetched once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardsState {
    pub response: AppResponse<UserPage>,
}

impl UiState for CardsState {}

impl CardsState {
    /// True until a page has been resolved.
    pub fn needs_fetch(&self) -> bool {
        !self.response.is_resolved() && !self.response.is_pending()
    }

    pub fn users(&self) -> &[UserRecord] {
        self.response
            .data
            .as_ref()
            .map(|page| page.data.as_slice())
            .unwrap_or(&[])
    }
}

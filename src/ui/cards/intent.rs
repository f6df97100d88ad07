use crate::api::{AppResponse, UserPage};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CardsIntent {
    /// A fetch for the card page was issued.
    Requested,
    /// The fetch finished, successfully or not.
    Loaded { response: AppResponse<UserPage> },
}

impl Intent for CardsIntent {}

use crate::api::{Country, ErrorBody};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CountriesIntent {
    /// A list arrived from the cache or the endpoint.
    SetDisplayData { countries: Vec<Country> },
    /// Slide the window towards the end of the list.
    LoadNextItems,
    /// Slide the window towards the start of the list.
    LoadPrevItems,
    FetchStarted,
    FetchFailed { error: ErrorBody },
}

impl Intent for CountriesIntent {}

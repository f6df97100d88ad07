use crate::api::{Country, ErrorBody, Status};
use crate::config::WindowConfig;
use crate::ui::mvi::UiState;

/// Country list plus the inclusive window `min..=max` currently rendered.
///
/// With a non-empty list `min <= max <= len - 1` always holds. Without one,
/// `min == max == 0` and nothing is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct CountriesState {
    pub countries: Option<Vec<Country>>,
    pub range: usize,
    pub step: usize,
    pub min: usize,
    pub max: usize,
    pub status: Status,
    pub error: Option<ErrorBody>,
}

impl Default for CountriesState {
    fn default() -> Self {
        Self::with_window(WindowConfig::default())
    }
}

impl UiState for CountriesState {}

impl CountriesState {
    pub fn with_window(window: WindowConfig) -> Self {
        Self {
            countries: None,
            range: window.range.max(1),
            step: window.step.max(1),
            min: 0,
            max: 0,
            status: Status::Idle,
            error: None,
        }
    }

    pub fn len(&self) -> usize {
        self.countries.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Countries inside the window.
    pub fn visible(&self) -> &[Country] {
        match &self.countries {
            Some(list) if !list.is_empty() => &list[self.min..=self.max],
            _ => &[],
        }
    }

    pub fn at_start(&self) -> bool {
        self.min == 0
    }

    pub fn at_end(&self) -> bool {
        self.is_empty() || self.max + 1 == self.len()
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Pending
    }

    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(ErrorBody::to_json)
    }
}

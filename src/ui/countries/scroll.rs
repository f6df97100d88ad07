//! Maps viewport scrolling onto window shifts.

use crate::ui::mvi::Reducer;

use super::intent::CountriesIntent;
use super::reducer::CountriesReducer;
use super::state::CountriesState;

/// Scrolling up to this fraction of the scrollable height loads previous items.
pub const TOP_THRESHOLD: f64 = 0.16;
/// Scrolling down past this fraction of the scrollable height loads next items.
pub const BOTTOM_THRESHOLD: f64 = 0.84;

/// Viewport over the visible slice of the country list.
///
/// `offset` is the first rendered row within the window. The tracker
/// remembers the previous offset to tell scroll direction apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollTracker {
    offset: usize,
    last_offset: usize,
    dispatching: bool,
}

impl ScrollTracker {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scroll by `delta` rows and report the window shift it triggers, if any.
    pub fn scroll_by(
        &mut self,
        delta: isize,
        viewport: usize,
        state: &CountriesState,
    ) -> Option<CountriesIntent> {
        self.scroll_to(self.offset.saturating_add_signed(delta), viewport, state)
    }

    /// Move the viewport to `offset`, clamped to the scrollable height.
    pub fn scroll_to(
        &mut self,
        offset: usize,
        viewport: usize,
        state: &CountriesState,
    ) -> Option<CountriesIntent> {
        let scrollable = scrollable_height(state, viewport);
        self.offset = offset.min(scrollable);
        self.observe(self.offset, scrollable, state)
    }

    /// Threshold check for a scroll to `offset`.
    ///
    /// While a window shift is being dispatched the offset is only recorded.
    pub fn observe(
        &mut self,
        offset: usize,
        scrollable: usize,
        state: &CountriesState,
    ) -> Option<CountriesIntent> {
        if self.dispatching {
            self.last_offset = offset;
            return None;
        }

        let position = offset as f64;
        let top_part = scrollable as f64 * TOP_THRESHOLD;
        let bottom_part = scrollable as f64 * BOTTOM_THRESHOLD;

        let intent = if position <= top_part && self.last_offset > offset && !state.at_start() {
            Some(CountriesIntent::LoadPrevItems)
        } else if position >= bottom_part && self.last_offset < offset && !state.at_end() {
            Some(CountriesIntent::LoadNextItems)
        } else {
            None
        };
        self.last_offset = offset;
        intent
    }

    /// Apply a window shift and keep the same rows under the viewport.
    pub fn safe_dispatch(
        &mut self,
        state: CountriesState,
        intent: CountriesIntent,
        viewport: usize,
    ) -> CountriesState {
        self.dispatching = true;
        let old_min = state.min;
        let next = CountriesReducer::reduce(state, intent);

        let anchored = if next.min >= old_min {
            self.offset.saturating_sub(next.min - old_min)
        } else {
            self.offset + (old_min - next.min)
        };
        let cascade = self.scroll_to(anchored, viewport, &next);
        debug_assert!(cascade.is_none());
        self.dispatching = false;
        next
    }
}

fn scrollable_height(state: &CountriesState, viewport: usize) -> usize {
    state.visible().len().saturating_sub(viewport)
}

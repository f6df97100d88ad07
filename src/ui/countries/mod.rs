//! Infinite-scroll country browser.
//!
//! Renders a sliding window over the cached country list. Scrolling near the
//! edges of the window moves it by a fixed step.

mod intent;
mod reducer;
mod scroll;
mod state;
mod view;

pub use intent::CountriesIntent;
pub use reducer::CountriesReducer;
pub use scroll::{ScrollTracker, BOTTOM_THRESHOLD, TOP_THRESHOLD};
pub use state::CountriesState;
pub use view::render_countries;

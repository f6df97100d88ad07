mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CardsIntent;
pub use reducer::CardsReducer;
pub use state::CardsState;
pub use view::render_cards;

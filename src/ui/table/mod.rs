mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TableIntent;
pub use reducer::TableReducer;
pub use state::{TableState, FIRST_PAGE, LAST_PAGE, PAGE_INPUT_MAX_LEN};
pub use view::render_table;

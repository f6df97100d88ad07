//! Model-View-Intent primitives shared by the views.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Key presses and fetch results become intents; a reducer folds each one
//! into the view's state; the renderer draws whatever state results.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

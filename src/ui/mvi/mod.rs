//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of widget state (press session, counter, feedback, screens)
//! is a plain value transformed by a pure reducer. Timers and network calls
//! never touch state directly: they post events that the app turns into
//! intents.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── events (input, timers, network) ──┘
//! ```

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

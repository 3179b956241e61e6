//! Gesture classification: tap versus long-press.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Press session (Idle → Pressed → Pressed{long_press})
//! - `intent.rs` - Raw press events and the threshold timer firing
//! - `reducer.rs` - State transitions and the action each intent produces
//!
//! The threshold timer itself is a resource owned by the app. Each press
//! bumps the session generation, and a timer event carrying an older
//! generation is ignored.

mod intent;
mod reducer;
mod state;

pub use intent::{GestureIntent, InputSource};
pub use reducer::{GestureAction, GestureReducer};
pub use state::{GestureState, PressSession};

//! Transient feedback shown after a mutation settles.
//!
//! Uses MVI (Model-View-Intent) pattern. Presenting new feedback always
//! replaces the old one; the expiry timer is tagged with the generation it
//! was armed for so a superseded timer can't clear newer feedback.

mod intent;
mod reducer;
mod state;

pub use intent::FeedbackIntent;
pub use reducer::FeedbackReducer;
pub use state::{Feedback, FeedbackState};

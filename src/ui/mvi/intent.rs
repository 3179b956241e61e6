//! Marker trait for intents.

/// An input to a reducer.
///
/// Intents come from three places:
/// - Raw input (press start, press end, typed characters)
/// - Timers (long-press threshold, feedback expiry)
/// - Settled network calls
pub trait Intent: Send + 'static {}

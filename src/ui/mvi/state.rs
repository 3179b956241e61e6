//! Marker trait for UI state.

/// State objects are cloneable values, comparable so the app can detect
/// changes and notify observers, with a `Default` starting point.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

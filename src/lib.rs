//! Tap counter: a single-user widget that records taps against a remote
//! counter service.
//!
//! A short press increments, a long press removes the last tap. Both apply
//! an optimistic update, allow one request in flight at a time and roll back
//! when the request fails.

pub mod config;
pub mod logging;
pub mod service;
pub mod shutdown;
pub mod ui;

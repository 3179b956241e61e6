//! Remote counter service.
//!
//! The service accepts fire-and-forget mutations and answers count and
//! leaderboard queries. Mutations give the caller no readable confirmation:
//! `Ok(())` from [`CounterService::increment`] or [`CounterService::decrement`]
//! means the request left without a transport error, not that the server
//! applied it.

pub mod demo;
pub mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use demo::DemoCounterService;
pub use http::HttpCounterService;

/// Errors returned by the counter service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Network unreachable, timeout, connection reset.
    #[error("{message}")]
    Transport { message: String },

    /// A query answered with a body we could not interpret.
    #[error("Unexpected response: {message}")]
    Decode { message: String },
}

impl ServiceError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub name: String,
    pub count: u64,
}

#[async_trait]
pub trait CounterService: Send + Sync {
    /// Returns the identifier of this service for logging.
    fn name(&self) -> &'static str;

    /// Current count for `user`.
    async fn get_count(&self, user: &str) -> Result<u64, ServiceError>;

    /// Top `limit` entries, highest count first.
    async fn get_leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ServiceError>;

    /// Records one tap for `user`.
    async fn increment(&self, user: &str) -> Result<(), ServiceError>;

    /// Removes the most recent tap recorded for `user`.
    async fn decrement(&self, user: &str) -> Result<(), ServiceError>;
}

//! Local stand-in used when no endpoint is configured.

use async_trait::async_trait;
use std::time::Duration;

use crate::service::{CounterService, LeaderboardEntry, ServiceError};

const DEMO_LATENCY: Duration = Duration::from_millis(300);

/// Accepts every mutation after a short delay and keeps no state.
#[derive(Debug, Clone)]
pub struct DemoCounterService {
    latency: Duration,
}

impl DemoCounterService {
    pub fn new() -> Self {
        Self {
            latency: DEMO_LATENCY,
        }
    }
}

impl Default for DemoCounterService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CounterService for DemoCounterService {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn get_count(&self, _user: &str) -> Result<u64, ServiceError> {
        Ok(0)
    }

    async fn get_leaderboard(&self, _limit: usize) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        Ok(Vec::new())
    }

    async fn increment(&self, _user: &str) -> Result<(), ServiceError> {
        tokio::time::sleep(self.latency).await;
        Ok(())
    }

    async fn decrement(&self, _user: &str) -> Result<(), ServiceError> {
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

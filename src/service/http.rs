use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ServiceConfig;
use crate::service::{CounterService, LeaderboardEntry, ServiceError};

const DECREMENT_ACTION: &str = "deleteLastEntry";

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: i64,
}

#[derive(Debug, Deserialize)]
struct LeaderboardResponse {
    #[serde(default)]
    leaderboard: Vec<LeaderboardRow>,
}

#[derive(Debug, Deserialize)]
struct LeaderboardRow {
    name: String,
    count: i64,
}

impl From<LeaderboardRow> for LeaderboardEntry {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            name: row.name,
            count: clamp_count(row.count),
        }
    }
}

/// Counts are never shown negative.
fn clamp_count(count: i64) -> u64 {
    count.max(0) as u64
}

#[derive(Debug, Serialize)]
struct MutationBody<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<&'static str>,
}

/// HTTP client for the counter service.
pub struct HttpCounterService {
    client: Client,
    endpoint: Url,
}

impl HttpCounterService {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ServiceError::Decode {
            message: format!("invalid endpoint '{}': {}", endpoint, e),
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &ServiceConfig, endpoint: &str) -> Result<Self, ServiceError> {
        Self::new(endpoint, config.request_timeout())
    }

    fn query_url(&self, params: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(params);
        url
    }

    /// Sends a mutation without inspecting the response.
    ///
    /// The service sits behind a cross-origin redirect whose status and body
    /// are not meaningful, so any completed exchange counts as delivered.
    async fn post_mutation(&self, body: MutationBody<'_>) -> Result<(), ServiceError> {
        let payload =
            serde_json::to_string(&body).map_err(|e| ServiceError::Decode {
                message: e.to_string(),
            })?;

        self.client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "text/plain")
            .body(payload)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        Ok(())
    }
}

#[async_trait]
impl CounterService for HttpCounterService {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn get_count(&self, user: &str) -> Result<u64, ServiceError> {
        let url = self.query_url(&[("action", "getCount"), ("name", user)]);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        let body: CountResponse = response.json().await.map_err(|e| ServiceError::Decode {
            message: e.to_string(),
        })?;
        Ok(clamp_count(body.count))
    }

    async fn get_leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        let limit = limit.to_string();
        let url = self.query_url(&[("action", "getLeaderboard"), ("limit", limit.as_str())]);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;
        let body: LeaderboardResponse =
            response.json().await.map_err(|e| ServiceError::Decode {
                message: e.to_string(),
            })?;
        Ok(body.leaderboard.into_iter().map(LeaderboardEntry::from).collect())
    }

    async fn increment(&self, user: &str) -> Result<(), ServiceError> {
        self.post_mutation(MutationBody {
            name: user,
            action: None,
        })
        .await
    }

    async fn decrement(&self, user: &str) -> Result<(), ServiceError> {
        self.post_mutation(MutationBody {
            name: user,
            action: Some(DECREMENT_ACTION),
        })
        .await
    }
}

fn transport_error(err: &reqwest::Error) -> ServiceError {
    let message = if err.is_timeout() {
        "Request timed out".to_string()
    } else if err.is_connect() {
        "Network error".to_string()
    } else {
        err.to_string()
    };
    ServiceError::Transport { message }
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub gestures: GestureConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
}

/// Remote counter service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Endpoint of the counter service. `None` runs the local demo service.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
    /// Number of rows requested for the leaderboard (default: 10).
    #[serde(default = "default_leaderboard_limit")]
    pub leaderboard_limit: usize,
}

/// Gesture classification thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Hold duration after which a press counts as a long-press (default: 600).
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
}

/// Durations of transient feedback states.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Success and decrement feedback duration (default: 1500).
    #[serde(default = "default_success_duration_ms")]
    pub success_duration_ms: u64,
    /// Error feedback duration (default: 3000).
    #[serde(default = "default_error_duration_ms")]
    pub error_duration_ms: u64,
    /// Name entry rejection shake (default: 500).
    #[serde(default = "default_shake_duration_ms")]
    pub shake_duration_ms: u64,
}

fn default_request_timeout() -> u32 {
    10
}

fn default_leaderboard_limit() -> usize {
    10
}

fn default_long_press_ms() -> u64 {
    600
}

fn default_success_duration_ms() -> u64 {
    1500
}

fn default_error_duration_ms() -> u64 {
    3000
}

fn default_shake_duration_ms() -> u64 {
    500
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            request_timeout_seconds: default_request_timeout(),
            leaderboard_limit: default_leaderboard_limit(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            long_press_ms: default_long_press_ms(),
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            success_duration_ms: default_success_duration_ms(),
            error_duration_ms: default_error_duration_ms(),
            shake_duration_ms: default_shake_duration_ms(),
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.request_timeout_seconds))
    }
}

impl GestureConfig {
    pub fn long_press(&self) -> Duration {
        Duration::from_millis(self.long_press_ms)
    }
}

impl FeedbackConfig {
    pub fn success_duration(&self) -> Duration {
        Duration::from_millis(self.success_duration_ms)
    }

    pub fn error_duration(&self) -> Duration {
        Duration::from_millis(self.error_duration_ms)
    }

    pub fn shake_duration(&self) -> Duration {
        Duration::from_millis(self.shake_duration_ms)
    }
}

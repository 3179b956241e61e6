pub mod loader;
pub mod name_store;
pub mod types;

pub use loader::{app_dir, ConfigError, ENDPOINT_ENV_VAR};
pub use name_store::{NameStore, NameStoreError};
pub use types::{Config, FeedbackConfig, GestureConfig, ServiceConfig};

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use tapcounter::config::{Config, NameStore};
use tapcounter::logging::{default_log_path, init_tracing};
use tapcounter::service::{CounterService, DemoCounterService, HttpCounterService};
use tapcounter::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "tapcounter", version, about = "Tap to count, hold to undo")]
struct Cli {
    /// Counter service endpoint (overrides config and TAP_COUNTER_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Display name to count for (skips and updates the stored name)
    #[arg(long)]
    name: Option<String>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Hold duration in milliseconds that turns a press into an undo
    #[arg(long)]
    long_press_ms: Option<u64>,

    /// Write logs to this file instead of the default location
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    config.apply_env_overrides();
    if let Some(endpoint) = cli.endpoint {
        config.service.endpoint = Some(endpoint);
    }
    if let Some(long_press_ms) = cli.long_press_ms {
        config.gestures.long_press_ms = long_press_ms;
    }
    config.validate()?;

    let log_path = cli.log_file.unwrap_or_else(default_log_path);
    init_tracing(&log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    let service: Arc<dyn CounterService> = match &config.service.endpoint {
        Some(endpoint) => Arc::new(
            HttpCounterService::from_config(&config.service, endpoint)
                .context("Failed to build counter service client")?,
        ),
        None => Arc::new(DemoCounterService::new()),
    };

    let name_store = NameStore::default_location();
    let user_name = match cli.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => {
            if let Err(err) = name_store.save(name) {
                tracing::warn!(error = %err, "failed to store display name");
            }
            Some(name.to_string())
        }
        _ => name_store.load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to read stored display name");
            None
        }),
    };

    tracing::info!(
        config = %config_path.display(),
        service = service.name(),
        user = user_name.as_deref().unwrap_or("<unset>"),
        "starting tap counter"
    );

    runtime::run(config, service, name_store, user_name)
        .await
        .context("Terminal UI failed")?;
    Ok(())
}

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::app_dir;

/// Default log file; the TUI owns stdout so logs go to disk.
pub fn default_log_path() -> PathBuf {
    app_dir().join("tap-counter.log")
}

/// Installs the global subscriber writing to `path` (appending).
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

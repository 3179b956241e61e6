//! Persistence of the single display name.
//!
//! The name lives in a plain text file next to the config file. Writes take an
//! exclusive lock so two instances started at once can't interleave.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use thiserror::Error;

use crate::config::loader::app_dir;

#[derive(Debug, Error)]
pub enum NameStoreError {
    #[error("Failed to access name file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct NameStore {
    path: PathBuf,
}

impl NameStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at `<config_dir>/tap-counter/user-name`.
    pub fn default_location() -> Self {
        Self::new(app_dir().join("user-name"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored name, or `None` if nothing (or only whitespace) is stored.
    pub fn load(&self) -> Result<Option<String>, NameStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let name = content.trim();
                Ok((!name.is_empty()).then(|| name.to_string()))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    pub fn save(&self, name: &str) -> Result<(), NameStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.lock_exclusive().map_err(|e| self.io_error(e))?;

        let result = file
            .set_len(0)
            .and_then(|_| file.write_all(name.trim().as_bytes()))
            .and_then(|_| file.flush());
        let _ = FileExt::unlock(&file);
        result.map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: io::Error) -> NameStoreError {
        NameStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

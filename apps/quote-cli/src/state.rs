//! # Form State Stores
//!
//! Picks where the form lives for this invocation.
//!
//! ```text
//! --state-file PATH given? ──yes──► JsonFileFormStore (scratch file for a session)
//!          │
//!          no
//!          ▼
//!   MemoryFormStore (gone when the process exits)
//! ```
//!
//! Neither store is a quote history: each holds exactly one form.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use quote_core::{FormState, FormStateRepository, MemoryFormStore};

/// Opens the store selected on the command line.
pub fn open_store(state_file: Option<&Path>) -> Arc<dyn FormStateRepository> {
    match state_file {
        Some(path) => Arc::new(JsonFileFormStore::new(path)),
        None => Arc::new(MemoryFormStore::new()),
    }
}

/// Form state kept as pretty-printed JSON in a single file.
///
/// An unreadable or corrupt file counts as "nothing saved"; write failures
/// are logged and otherwise ignored, matching the in-memory store's
/// infallible interface.
#[derive(Debug, Clone)]
pub struct JsonFileFormStore {
    path: PathBuf,
}

impl JsonFileFormStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileFormStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, state: &FormState) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, json)
    }
}

impl FormStateRepository for JsonFileFormStore {
    fn load(&self) -> Option<FormState> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Cannot read form state");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => {
                debug!(path = %self.path.display(), "Loaded form state");
                Some(state)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring corrupt form state");
                None
            }
        }
    }

    fn save(&self, state: FormState) {
        match self.write(&state) {
            Ok(()) => debug!(path = %self.path.display(), "Saved form state"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "Cannot save form state"),
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Cleared form state"),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Cannot clear form state"),
        }
    }
}

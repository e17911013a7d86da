//! File-backed session persistence.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use star4ce_core::error::{AppError, ErrorKind};
use star4ce_core::result::AppResult;

use super::SessionBackend;

/// Session backend persisting the payload to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    /// Location of the session file.
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend writing to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a backend at the default location,
    /// `<user config dir>/star4ce/session.json`.
    pub fn default_location() -> AppResult<Self> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            AppError::configuration("Could not determine user configuration directory")
        })?;
        Ok(Self::new(config_dir.join("star4ce").join("session.json")))
    }

    /// The path this backend writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionBackend for FileBackend {
    async fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read session file: {e}"),
                e,
            )),
        }
    }

    async fn save(&self, payload: &str) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::storage(format!("Failed to create session directory: {e}"))
            })?;
        }
        fs::write(&self.path, payload)
            .await
            .map_err(|e| AppError::storage(format!("Failed to write session file: {e}")))
    }

    async fn delete(&self) -> AppResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!(
                "Failed to delete session file: {e}"
            ))),
        }
    }
}

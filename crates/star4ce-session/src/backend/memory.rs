//! In-memory session persistence.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use star4ce_core::result::AppResult;

use super::SessionBackend;

/// In-process session backend, for tests and ephemeral sessions.
///
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds a usable Option; recover rather than panic.
    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    async fn load(&self) -> AppResult<Option<String>> {
        Ok(self.slot().clone())
    }

    async fn save(&self, payload: &str) -> AppResult<()> {
        *self.slot() = Some(payload.to_string());
        Ok(())
    }

    async fn delete(&self) -> AppResult<()> {
        *self.slot() = None;
        Ok(())
    }
}

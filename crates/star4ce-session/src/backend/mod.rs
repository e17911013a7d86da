//! Pluggable persistence backends for the session store.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use star4ce_core::result::AppResult;

pub use file::FileBackend;
pub use memory::MemoryBackend;

/// Trait for session persistence backends.
///
/// The store holds at most one serialized credential payload. Backends
/// only move opaque strings; (de)serialization lives in the store.
#[async_trait]
pub trait SessionBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Load the persisted payload, or `None` if nothing is stored.
    async fn load(&self) -> AppResult<Option<String>>;

    /// Persist a payload, replacing any previous one.
    async fn save(&self, payload: &str) -> AppResult<()>;

    /// Remove the persisted payload. Deleting an empty store is a no-op.
    async fn delete(&self) -> AppResult<()>;
}

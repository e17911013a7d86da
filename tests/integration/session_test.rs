//! Integration tests for file-backed session persistence.

use std::sync::Arc;

use star4ce_session::{Credential, FileBackend, SessionStore};

fn file_store(dir: &tempfile::TempDir) -> SessionStore {
    let backend = FileBackend::new(dir.path().join("session.json"));
    SessionStore::new(Arc::new(backend))
}

#[tokio::test]
async fn test_credential_survives_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let credential = Credential::new("abc123", "manager", "lead@star4ce.com");

    file_store(&dir).set(&credential).await.unwrap();

    // A fresh store over the same file sees the same credential.
    let reopened = file_store(&dir);
    assert_eq!(reopened.credential().await, Some(credential));
}

#[tokio::test]
async fn test_clear_on_empty_store_is_noop() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    store.clear().await.unwrap();
    store.clear().await.unwrap();

    assert_eq!(store.token().await, None);
}

#[tokio::test]
async fn test_clear_removes_persisted_credential() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    store
        .set(&Credential::new("abc123", "manager", "lead@star4ce.com"))
        .await
        .unwrap();

    store.clear().await.unwrap();

    assert_eq!(file_store(&dir).token().await, None);
}

#[tokio::test]
async fn test_corrupt_session_file_reads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("session.json"), "{not json").unwrap();

    assert_eq!(file_store(&dir).token().await, None);
}

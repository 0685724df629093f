// src/application/ports/storage.rs
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not store file: {0}")]
    Write(String),
    #[error("could not delete file: {0}")]
    Delete(String),
    #[error("invalid file reference: {0}")]
    InvalidReference(String),
}

/// An uploaded file decoded from the request, ready to persist.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// File storage for uploaded cover images. `put` returns a stable relative
/// path that is persisted on the project row and accepted back by `delete`.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn put(&self, namespace: &str, payload: &ImagePayload)
    -> Result<String, StorageError>;
    async fn delete(&self, path: &str) -> Result<(), StorageError>;
}

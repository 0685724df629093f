// src/infrastructure/storage/fs_store.rs
use crate::application::ports::storage::{ImagePayload, ImageStore, StorageError};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

/// Stores uploads on the local filesystem under a media root, one directory
/// per namespace. Returned references are relative paths like
/// `project_images/<uuid>.png`, which is what gets persisted on the row.
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Rejects references that would escape the media root.
    fn resolve(&self, reference: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(reference);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if reference.is_empty() || !safe {
            return Err(StorageError::InvalidReference(reference.to_owned()));
        }
        Ok(self.root.join(relative))
    }

    fn extension_of(file_name: &str) -> Option<String> {
        let ext = Path::new(file_name).extension()?.to_str()?;
        let ext = ext.to_ascii_lowercase();
        if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            Some(ext)
        } else {
            None
        }
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn put(
        &self,
        namespace: &str,
        payload: &ImagePayload,
    ) -> Result<String, StorageError> {
        let dir = self.resolve(namespace)?;
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|err| StorageError::Write(err.to_string()))?;

        let file_name = match Self::extension_of(&payload.file_name) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::write(dir.join(&file_name), &payload.bytes)
            .await
            .map_err(|err| StorageError::Write(err.to_string()))?;

        Ok(format!("{namespace}/{file_name}"))
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let target = self.resolve(path)?;
        tokio::fs::remove_file(target)
            .await
            .map_err(|err| StorageError::Delete(err.to_string()))
    }
}

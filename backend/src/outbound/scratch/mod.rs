//! Filesystem scratch storage for transient uploads.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use crate::domain::ports::{ScratchHandle, ScratchStore, ScratchStoreError};

/// Writes uploads under a spool directory, one uuid-named file each.
///
/// The directory is created on first stash. Files live only for the duration
/// of one prediction request; the service discards them once classification
/// completes.
#[derive(Debug, Clone)]
pub struct FsScratchStore {
    dir: PathBuf,
}

impl FsScratchStore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ScratchStore for FsScratchStore {
    async fn stash(
        &self,
        bytes: &[u8],
        extension: Option<String>,
    ) -> Result<ScratchHandle, ScratchStoreError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|error| ScratchStoreError::io(error.to_string()))?;

        let file_name = match extension {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)
            .await
            .map_err(|error| ScratchStoreError::io(error.to_string()))?;
        Ok(ScratchHandle::new(path))
    }

    async fn discard(&self, handle: ScratchHandle) -> Result<(), ScratchStoreError> {
        match fs::remove_file(handle.path()).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(ScratchStoreError::io(error.to_string())),
        }
    }
}

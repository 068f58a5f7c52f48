//! Port for transient upload storage.
//!
//! Stashing the upload is an implementation convenience, not a correctness
//! requirement: the prediction pipeline treats stash and discard failures as
//! loggable events, never as request failures.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// Handle to a stashed upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchHandle(PathBuf);

impl ScratchHandle {
    /// Wrap a storage location.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Returns the storage location.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

/// Errors raised by scratch store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScratchStoreError {
    /// Reading or writing transient storage failed.
    #[error("scratch storage failed: {message}")]
    Io {
        /// Adapter-supplied failure detail.
        message: String,
    },
}

impl ScratchStoreError {
    /// Build a [`Self::Io`] error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Port for write-then-delete transient upload storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScratchStore: Send + Sync {
    /// Write upload bytes to transient storage.
    async fn stash(
        &self,
        bytes: &[u8],
        extension: Option<String>,
    ) -> Result<ScratchHandle, ScratchStoreError>;

    /// Remove a stashed upload.
    ///
    /// Discarding a handle whose file is already gone is a no-op.
    async fn discard(&self, handle: ScratchHandle) -> Result<(), ScratchStoreError>;
}

/// No-op store for deployments and tests that skip transient storage.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopScratchStore;

#[async_trait]
impl ScratchStore for NoopScratchStore {
    async fn stash(
        &self,
        _bytes: &[u8],
        _extension: Option<String>,
    ) -> Result<ScratchHandle, ScratchStoreError> {
        Ok(ScratchHandle::new(PathBuf::new()))
    }

    async fn discard(&self, _handle: ScratchHandle) -> Result<(), ScratchStoreError> {
        Ok(())
    }
}

//! Local filesystem blob store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use bilarn_core::error::BlobError;
use bilarn_core::ports::{BlobStore, StoredBlob};

use super::naming::blob_name;

/// Stores uploads as flat files in one directory.
///
/// Names come from a millisecond clock that never repeats within the process,
/// so two uploads in the same millisecond get distinct files.
pub struct LocalBlobStore {
    root: PathBuf,
    last_token: AtomicI64,
}

impl LocalBlobStore {
    /// Open the store at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, BlobError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        tracing::info!(path = %root.display(), "Upload directory ready");

        Ok(Self {
            root,
            last_token: AtomicI64::new(0),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn next_token(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_token
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }

    /// Resolve a stored name to a path inside `root`, rejecting anything that
    /// is not a plain file name.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let is_plain = !name.is_empty()
            && !name.contains(['/', '\\'])
            && Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name);
        is_plain.then(|| self.root.join(name))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<String, BlobError> {
        let name = blob_name(self.next_token(), original_filename);
        tokio::fs::write(self.root.join(&name), bytes).await?;

        tracing::debug!(blob = %name, size = bytes.len(), "Stored upload");
        Ok(name)
    }

    async fn fetch(&self, name: &str) -> Result<StoredBlob, BlobError> {
        let path = self
            .resolve(name)
            .ok_or_else(|| BlobError::NotFound(name.to_string()))?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(StoredBlob {
                name: name.to_string(),
                bytes,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(BlobError::NotFound(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

use async_trait::async_trait;

use crate::error::BlobError;

/// A file read back from the blob store.
#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Storage for uploaded images.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `bytes` under a freshly generated name derived from
    /// `original_filename`. Returns the generated name.
    async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<String, BlobError>;

    /// Read a previously stored file by the name `store` returned.
    async fn fetch(&self, name: &str) -> Result<StoredBlob, BlobError>;
}

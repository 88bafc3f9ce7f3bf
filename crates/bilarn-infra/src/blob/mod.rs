//! Blob storage for uploaded images.

mod local;
mod naming;

pub use local::LocalBlobStore;
pub use naming::blob_name;

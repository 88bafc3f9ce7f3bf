//! # Bilarn Infrastructure
//!
//! Concrete implementations of the ports defined in `bilarn-core`:
//! blog post repositories and the upload blob store.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL blog store via SeaORM
//! - `minimal` - No database driver, in-memory blog store only

pub mod blob;
pub mod database;

// Re-exports
pub use blob::LocalBlobStore;
pub use database::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DbHandle, PostgresBlogPostRepository};

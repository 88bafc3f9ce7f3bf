//! Application state - shared across all handlers.

use std::sync::Arc;

use bilarn_core::ports::{BlobStore, BlogPostRepository};
use bilarn_infra::{InMemoryBlogPostRepository, LocalBlobStore};

#[cfg(feature = "postgres")]
use bilarn_infra::{DbHandle, PostgresBlogPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    pub blobs: Arc<dyn BlobStore>,
    /// Name of the blog store backend, reported by the health check.
    pub backend: &'static str,
    pub max_upload_bytes: usize,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DbHandle>>,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// Falls back to the in-memory blog store when no database is configured
    /// or the connection fails. An unusable upload directory is fatal.
    pub async fn new(config: &AppConfig) -> std::io::Result<Self> {
        let blobs = LocalBlobStore::open(&config.upload_dir)
            .await
            .map_err(std::io::Error::other)?;

        #[cfg(feature = "postgres")]
        let (db, posts, backend): (
            Option<Arc<DbHandle>>,
            Arc<dyn BlogPostRepository>,
            &'static str,
        ) = {
            if let Some(db_config) = &config.database {
                match DbHandle::init(db_config).await {
                    Ok(handle) => {
                        let repo = Arc::new(PostgresBlogPostRepository::new(handle.main.clone()));
                        (Some(Arc::new(handle)), repo, "postgres")
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (None, Arc::new(InMemoryBlogPostRepository::new()), "memory")
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (None, Arc::new(InMemoryBlogPostRepository::new()), "memory")
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (posts, backend): (Arc<dyn BlogPostRepository>, &'static str) = {
            if config.database.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            (Arc::new(InMemoryBlogPostRepository::new()), "memory")
        };

        tracing::info!(backend, "Application state initialized");

        Ok(Self {
            posts,
            blobs: Arc::new(blobs),
            backend,
            max_upload_bytes: config.max_upload_bytes,
            #[cfg(feature = "postgres")]
            db,
        })
    }

    /// Assemble state from ready-made stores.
    #[cfg(test)]
    pub fn from_parts(
        posts: Arc<dyn BlogPostRepository>,
        blobs: Arc<dyn BlobStore>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            posts,
            blobs,
            backend: "memory",
            max_upload_bytes,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Release external resources after the HTTP server has stopped.
    #[cfg(feature = "postgres")]
    pub async fn shutdown(&self) {
        if let Some(db) = &self.db {
            if let Err(e) = db.close().await {
                tracing::error!("Failed to close database connection: {}", e);
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn shutdown(&self) {}
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Apply `changes` to the post with `id`. `Ok(None)` when no such post exists.
    async fn update_by_id(
        &self,
        id: Uuid,
        changes: BlogPostChanges,
    ) -> Result<Option<BlogPost>, RepoError>;
}

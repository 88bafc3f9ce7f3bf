//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, IntoActiveModel, QueryOrder, Set};
use uuid::Uuid;

use bilarn_core::domain::{BlogPost, BlogPostChanges};
use bilarn_core::error::RepoError;
use bilarn_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, query_err};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_desc(blog_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: BlogPostChanges,
    ) -> Result<Option<BlogPost>, RepoError> {
        let Some(existing) = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        active.title = Set(changes.title);
        active.content = Set(changes.content);
        if let Some(image_url) = changes.image_url {
            active.image_url = Set(Some(image_url));
        }

        tracing::debug!(post_id = %id, "Updating blog post");
        match active.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            // Row removed between the read and the write.
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(query_err(err)),
        }
    }
}

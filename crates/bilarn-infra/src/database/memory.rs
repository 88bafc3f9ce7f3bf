//! In-memory blog post store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use bilarn_core::domain::{BlogPost, BlogPostChanges};
use bilarn_core::error::RepoError;
use bilarn_core::ports::{BaseRepository, BlogPostRepository};

/// Blog posts kept in a `HashMap` behind an async `RwLock`.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        if posts.contains_key(&post.id) {
            return Err(RepoError::Query(format!("duplicate id {}", post.id)));
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.posts.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn list_newest_first(&self) -> Result<Vec<BlogPost>, RepoError> {
        let mut all: Vec<BlogPost> = self.posts.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: BlogPostChanges,
    ) -> Result<Option<BlogPost>, RepoError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.get_mut(&id) else {
            return Ok(None);
        };
        post.apply(changes);
        Ok(Some(post.clone()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use bilarn_core::domain::NewBlogPost;

    use super::*;

    fn post(title: &str, age_secs: i64) -> BlogPost {
        let input = NewBlogPost::parse(
            Some(title.to_string()),
            Some("body".to_string()),
            Some("ada".to_string()),
        )
        .unwrap();
        let mut post = BlogPost::create(input, None);
        post.created_at = Utc::now() - Duration::seconds(age_secs);
        post
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryBlogPostRepository::new();
        let saved = repo.insert(post("A", 0)).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
        assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryBlogPostRepository::new();
        repo.insert(post("A", 30)).await.unwrap();
        repo.insert(post("C", 10)).await.unwrap();
        repo.insert(post("B", 20)).await.unwrap();

        let titles: Vec<String> = repo
            .list_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let repo = InMemoryBlogPostRepository::new();
        assert!(repo.list_newest_first().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryBlogPostRepository::new();
        let changes = BlogPostChanges::parse(Some("t".into()), Some("c".into())).unwrap();
        assert_eq!(repo.update_by_id(Uuid::new_v4(), changes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_keeps_identity_fields() {
        let repo = InMemoryBlogPostRepository::new();
        let mut original = post("A", 5);
        original.image_url = Some("/uploads/1.png".to_string());
        let saved = repo.insert(original).await.unwrap();

        let changes = BlogPostChanges::parse(Some("B".into()), Some("new".into())).unwrap();
        let updated = repo.update_by_id(saved.id, changes).await.unwrap().unwrap();

        assert_eq!(updated.title, "B");
        assert_eq!(updated.image_url, saved.image_url);
        assert_eq!(updated.created_at, saved.created_at);
        assert_eq!(updated.creator, saved.creator);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryBlogPostRepository::new();
        let saved = repo.insert(post("A", 0)).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert!(matches!(
            repo.delete(saved.id).await,
            Err(RepoError::NotFound)
        ));
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), None);
    }
}

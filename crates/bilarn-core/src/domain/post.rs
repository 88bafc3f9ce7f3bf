use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog post entity - a titled Markdown article with an optional image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    /// Markdown source, stored verbatim.
    pub content: String,
    pub image_url: Option<String>,
    /// Free-text author name. Not tied to any identity.
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post from validated input, assigning id and creation time.
    pub fn create(input: NewBlogPost, image_url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            content: input.content,
            image_url,
            creator: input.creator,
            created_at: Utc::now(),
        }
    }

    /// Apply an update in place. `id`, `creator` and `created_at` never change.
    pub fn apply(&mut self, changes: BlogPostChanges) {
        self.title = changes.title;
        self.content = changes.content;
        if let Some(image_url) = changes.image_url {
            self.image_url = Some(image_url);
        }
    }
}

/// Validated fields for a post that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub creator: String,
}

impl NewBlogPost {
    /// Check that every required field is present and non-blank.
    pub fn parse(
        title: Option<String>,
        content: Option<String>,
        creator: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: required("title", title)?,
            content: required("content", content)?,
            creator: required("creator", creator)?,
        })
    }
}

/// Replacement values for an existing post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostChanges {
    pub title: String,
    pub content: String,
    /// `None` keeps the stored image.
    pub image_url: Option<String>,
}

impl BlogPostChanges {
    pub fn parse(title: Option<String>, content: Option<String>) -> Result<Self, DomainError> {
        Ok(Self {
            title: required("title", title)?,
            content: required("content", content)?,
            image_url: None,
        })
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

/// Parse a path segment into a post id.
pub fn parse_post_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::InvalidId(raw.to_string()))
}

fn required(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::Validation(format!("`{field}` is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewBlogPost {
        NewBlogPost::parse(
            Some("Hello".to_string()),
            Some("# Hi".to_string()),
            Some("ada".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        let err = NewBlogPost::parse(None, Some("body".into()), Some("ada".into())).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("title")));

        let err = NewBlogPost::parse(Some("t".into()), Some("body".into()), None).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("creator")));
    }

    #[test]
    fn test_parse_rejects_blank_fields() {
        let err = NewBlogPost::parse(Some("t".into()), Some("   ".into()), Some("ada".into()))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("content")));
    }

    #[test]
    fn test_create_assigns_identity() {
        let a = BlogPost::create(input(), None);
        let b = BlogPost::create(input(), Some("/uploads/1.png".into()));
        assert_ne!(a.id, b.id);
        assert_eq!(a.image_url, None);
        assert_eq!(b.image_url.as_deref(), Some("/uploads/1.png"));
        assert_eq!(a.creator, "ada");
    }

    #[test]
    fn test_apply_keeps_image_without_replacement() {
        let mut post = BlogPost::create(input(), Some("/uploads/1.png".into()));
        let (id, created_at) = (post.id, post.created_at);

        let changes = BlogPostChanges::parse(Some("New".into()), Some("text".into())).unwrap();
        post.apply(changes);

        assert_eq!(post.title, "New");
        assert_eq!(post.content, "text");
        assert_eq!(post.image_url.as_deref(), Some("/uploads/1.png"));
        assert_eq!(post.id, id);
        assert_eq!(post.created_at, created_at);
        assert_eq!(post.creator, "ada");
    }

    #[test]
    fn test_apply_replaces_image() {
        let mut post = BlogPost::create(input(), Some("/uploads/1.png".into()));
        let changes = BlogPostChanges::parse(Some("New".into()), Some("text".into()))
            .unwrap()
            .with_image("/uploads/2.jpg");
        post.apply(changes);
        assert_eq!(post.image_url.as_deref(), Some("/uploads/2.jpg"));
    }

    #[test]
    fn test_parse_post_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_post_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_post_id("not-an-id"),
            Err(DomainError::InvalidId(_))
        ));
    }
}

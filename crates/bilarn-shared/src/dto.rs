//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post as returned by create, list and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

/// A single blog post with its Markdown content rendered to HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetailResponse {
    #[serde(flatten)]
    pub post: BlogPostResponse,
    pub html_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPostResponse {
        BlogPostResponse {
            id: Uuid::nil(),
            title: "T".to_string(),
            content: "# Hi".to_string(),
            image_url: None,
            creator: "ada".to_string(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_camel_case_and_omitted_image() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("imageUrl").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_detail_is_flattened() {
        let detail = BlogPostDetailResponse {
            post: BlogPostResponse {
                image_url: Some("/uploads/1.png".to_string()),
                ..sample()
            },
            html_content: "<h1>Hi</h1>\n".to_string(),
        };
        let json = serde_json::to_value(detail).unwrap();
        assert_eq!(json["title"], "T");
        assert_eq!(json["imageUrl"], "/uploads/1.png");
        assert_eq!(json["htmlContent"], "<h1>Hi</h1>\n");
    }
}

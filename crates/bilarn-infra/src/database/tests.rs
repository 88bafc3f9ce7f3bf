use bilarn_core::domain::{BlogPost, BlogPostChanges};
use bilarn_core::error::RepoError;
use bilarn_core::ports::{BaseRepository, BlogPostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::blog_post;
use crate::database::postgres_repo::PostgresBlogPostRepository;

fn model(title: &str, image_url: Option<&str>) -> blog_post::Model {
    blog_post::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        content: "# Content".to_owned(),
        image_url: image_url.map(str::to_owned),
        creator: "ada".to_owned(),
        created_at: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post", None);
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.creator, "ada");
}

#[tokio::test]
async fn test_insert_returns_stored_row() {
    let row = model("Created", Some("/uploads/1.png"));
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![row.clone()]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let saved = repo.insert(BlogPost::from(row.clone())).await.unwrap();

    assert_eq!(saved.id, row.id);
    assert_eq!(saved.image_url.as_deref(), Some("/uploads/1.png"));
}

#[tokio::test]
async fn test_list_newest_first_orders_by_created_at() {
    let newer = model("Newer", None);
    let older = model("Older", None);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![newer, older]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let posts = repo.list_newest_first().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].title, "Newer");

    let log = repo.db.into_transaction_log();
    let sql = format!("{:?}", log[0]);
    assert!(sql.contains("ORDER BY"));
    assert!(sql.contains("DESC"));
}

#[tokio::test]
async fn test_update_missing_post_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<blog_post::Model>::new()])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let changes = BlogPostChanges::parse(Some("t".into()), Some("c".into())).unwrap();

    let result = repo.update_by_id(uuid::Uuid::new_v4(), changes).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_existing_post() {
    let existing = model("Old", Some("/uploads/1.png"));
    let updated = blog_post::Model {
        title: "New".to_owned(),
        content: "text".to_owned(),
        ..existing.clone()
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![existing.clone()], vec![updated]])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let changes = BlogPostChanges::parse(Some("New".into()), Some("text".into())).unwrap();

    let post = repo.update_by_id(existing.id, changes).await.unwrap().unwrap();
    assert_eq!(post.title, "New");
    assert_eq!(post.image_url.as_deref(), Some("/uploads/1.png"));
}

#[tokio::test]
async fn test_delete_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let result = BaseRepository::<BlogPost, _>::delete(&repo, uuid::Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_update_row_deleted_before_write_returns_none() {
    let existing = model("Old", None);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![existing.clone()], Vec::<blog_post::Model>::new()])
        .into_connection();

    let repo = PostgresBlogPostRepository::new(db);
    let changes = BlogPostChanges::parse(Some("New".into()), Some("text".into())).unwrap();

    let result = repo.update_by_id(existing.id, changes).await.unwrap();
    assert!(result.is_none());
}

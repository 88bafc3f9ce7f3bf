//! Blog post CRUD handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use bilarn_core::domain::{BlogPost, BlogPostChanges, NewBlogPost, parse_post_id};
use bilarn_core::ports::{BaseRepository, BlogPostRepository};
use bilarn_core::{DomainError, markdown};
use bilarn_shared::MessageResponse;
use bilarn_shared::dto::{BlogPostDetailResponse, BlogPostResponse};

use super::form::{BlogForm, ImageUpload};
use super::uploads::upload_url;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: BlogPost) -> BlogPostResponse {
    BlogPostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        image_url: post.image_url,
        creator: post.creator,
        created_at: post.created_at,
    }
}

/// Write an uploaded image and return the URL to link from the post.
async fn store_image(state: &AppState, image: ImageUpload) -> AppResult<String> {
    let name = state.blobs.store(&image.bytes, &image.filename).await?;
    Ok(upload_url(&name))
}

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Payload,
) -> AppResult<HttpResponse> {
    let form = BlogForm::decode(&req, payload, state.max_upload_bytes).await?;
    let input = NewBlogPost::parse(form.title, form.content, form.creator)?;

    let image_url = match form.image {
        Some(image) => Some(store_image(&state, image).await?),
        None => None,
    };

    let post = state.posts.insert(BlogPost::create(input, image_url)).await?;
    tracing::info!(post_id = %post.id, image = ?post.image_url, "Blog post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /blogs
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<BlogPostResponse> = state
        .posts
        .list_newest_first()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound(id))?;

    let html_content = markdown::render(&post.content);

    Ok(HttpResponse::Ok().json(BlogPostDetailResponse {
        post: to_response(post),
        html_content,
    }))
}

/// PUT /blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
    payload: web::Payload,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let form = BlogForm::decode(&req, payload, state.max_upload_bytes).await?;
    let mut changes = BlogPostChanges::parse(form.title, form.content)?;

    if let Some(image) = form.image {
        // Skip the file write for posts that do not exist.
        if state.posts.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound(id).into());
        }
        changes = changes.with_image(store_image(&state, image).await?);
    }

    let post = state
        .posts
        .update_by_id(id, changes)
        .await?
        .ok_or(DomainError::NotFound(id))?;
    tracing::info!(post_id = %post.id, "Blog post updated");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, "Blog post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Blog deleted")))
}

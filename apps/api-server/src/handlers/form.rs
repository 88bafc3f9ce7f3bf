//! Request body decoding for blog post writes: multipart forms or JSON.

use actix_multipart::Multipart;
use actix_web::{HttpMessage, HttpRequest, web};
use futures::TryStreamExt;
use serde::Deserialize;

use crate::middleware::error::{AppError, AppResult};

/// An image file attached to a form.
#[derive(Debug)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Fields of a create or update form. Absent fields stay `None`.
#[derive(Debug, Default)]
pub struct BlogForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub creator: Option<String>,
    pub image: Option<ImageUpload>,
}

/// JSON body accepted in place of a multipart form. It cannot carry an image.
#[derive(Debug, Deserialize)]
struct BlogJson {
    title: Option<String>,
    content: Option<String>,
    creator: Option<String>,
}

fn is_json(req: &HttpRequest) -> bool {
    let content_type = req.content_type();
    content_type == "application/json" || content_type.ends_with("+json")
}

impl BlogForm {
    /// Decode a write request body. JSON bodies fill the text fields only;
    /// anything else is read as `multipart/form-data`.
    pub async fn decode(
        req: &HttpRequest,
        payload: web::Payload,
        max_bytes: usize,
    ) -> AppResult<Self> {
        if is_json(req) {
            Self::read_json(payload, max_bytes).await
        } else {
            Self::read(Multipart::new(req.headers(), payload), max_bytes).await
        }
    }

    async fn read_json(mut payload: web::Payload, max_bytes: usize) -> AppResult<Self> {
        let mut body = Vec::new();
        while let Some(chunk) = payload.try_next().await? {
            if body.len() + chunk.len() > max_bytes {
                return Err(AppError::BadRequest(format!(
                    "Body exceeds the {max_bytes} byte limit"
                )));
            }
            body.extend_from_slice(&chunk);
        }

        let json: BlogJson = serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

        Ok(BlogForm {
            title: json.title,
            content: json.content,
            creator: json.creator,
            image: None,
        })
    }

    /// Drain `payload` into memory, failing once more than `max_bytes` of
    /// field data has been read.
    async fn read(mut payload: Multipart, max_bytes: usize) -> AppResult<Self> {
        let mut form = BlogForm::default();
        let mut total = 0usize;

        while let Some(mut field) = payload.try_next().await? {
            let name = field.name().unwrap_or_default().to_string();
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);

            let mut bytes = Vec::new();
            while let Some(chunk) = field.try_next().await? {
                total += chunk.len();
                if total > max_bytes {
                    return Err(AppError::BadRequest(format!(
                        "Upload exceeds the {max_bytes} byte limit"
                    )));
                }
                bytes.extend_from_slice(&chunk);
            }

            match name.as_str() {
                "title" => form.title = Some(text(&name, bytes)?),
                "content" => form.content = Some(text(&name, bytes)?),
                "creator" => form.creator = Some(text(&name, bytes)?),
                // A file input left empty arrives with a blank filename.
                "image" => {
                    form.image = filename
                        .filter(|f| !f.is_empty())
                        .map(|filename| ImageUpload { filename, bytes });
                }
                other => tracing::debug!(field = other, "Ignoring unknown form field"),
            }
        }

        Ok(form)
    }
}

fn text(name: &str, bytes: Vec<u8>) -> AppResult<String> {
    String::from_utf8(bytes)
        .map_err(|_| AppError::BadRequest(format!("`{name}` must be valid UTF-8")))
}

//! Serves stored image uploads.

use actix_web::{HttpResponse, web};

use bilarn_core::ports::BlobStore;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// URL prefix under which stored blobs are served.
pub const UPLOADS_PATH: &str = "/uploads";

/// Public URL for a stored blob name.
pub fn upload_url(name: &str) -> String {
    format!("{UPLOADS_PATH}/{name}")
}

/// GET /uploads/{filename}
pub async fn serve_upload(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let blob = state.blobs.fetch(&path.into_inner()).await?;
    let mime = mime_guess::from_path(&blob.name).first_or_octet_stream();

    Ok(HttpResponse::Ok().content_type(mime.to_string()).body(blob.bytes))
}

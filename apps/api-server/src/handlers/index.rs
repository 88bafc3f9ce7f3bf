//! Root welcome endpoint.

use actix_web::HttpResponse;

pub const WELCOME: &str = "Welcome to the Bilarn Blog App API!";

/// GET /
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(WELCOME)
}

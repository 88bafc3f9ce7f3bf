//! HTTP handlers and route configuration.

mod blogs;
mod form;
mod health;
mod index;
mod uploads;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index::welcome))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/blogs")
                .route("", web::post().to(blogs::create_blog))
                .route("", web::get().to(blogs::list_blogs))
                .route("/{id}", web::get().to(blogs::get_blog))
                .route("/{id}", web::put().to(blogs::update_blog))
                .route("/{id}", web::delete().to(blogs::delete_blog)),
        )
        .route(
            &format!("{}/{{filename}}", uploads::UPLOADS_PATH),
            web::get().to(uploads::serve_upload),
        );
}

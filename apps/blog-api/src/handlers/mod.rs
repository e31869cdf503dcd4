//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        // Unparseable bodies answer 400 with the parser's message
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        // A non-numeric id cannot match any row
        web::PathConfig::default().error_handler(|_err, _req| AppError::post_not_found().into()),
    )
    .route("/health", web::get().to(health::health_check))
    .service(
        web::resource("/posts")
            .route(web::get().to(posts::list_posts))
            .route(web::post().to(posts::create_post)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(posts::get_post))
            .route(web::put().to(posts::update_post))
            .route(web::delete().to(posts::delete_post)),
    );
}

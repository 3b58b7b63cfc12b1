use actix_web::{web, HttpResponse};

use errors::ErrorResponse;

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api").service(
            web::scope("/polls")
                .route("", web::get().to(polls::index))
                .service(
                    web::scope("/{id}")
                        .route("", web::get().to(polls::detail))
                        .route("/results", web::get().to(polls::results)),
                ),
        ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

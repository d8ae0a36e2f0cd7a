//! Blog post CRUD; create/update take multipart with an optional `image`.

use actix_web::{web, Scope};

mod delete;
mod get;
mod save;

const API_PATH: &str = "/api/blogs";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(get::list))
        .route("", web::post().to(save::create))
        .route("/{id}", web::get().to(get::process))
        .route("/{id}", web::put().to(save::update))
        .route("/{id}", web::delete().to(delete::process))
}

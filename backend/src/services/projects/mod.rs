//! Project showcase CRUD.
//!
//! `technologies` and `team_members` are list-valued: forms may submit them
//! as repeated fields or as one comma-separated string, both normalized to
//! trimmed lists at the boundary and stored as JSON arrays.

use actix_web::{web, Scope};

mod delete;
mod get;
mod save;

const API_PATH: &str = "/api/projects";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(get::list))
        .route("", web::post().to(save::create))
        .route("/{id}", web::get().to(get::process))
        .route("/{id}", web::put().to(save::update))
        .route("/{id}", web::delete().to(delete::process))
}

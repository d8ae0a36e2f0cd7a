//! # Gallery (carousel) service
//!
//! Serves the image gallery shown on the public site and managed from the
//! admin dashboard. Unlike the other services there is no database table
//! behind this one: the images themselves live in the gallery directory and
//! their captions/titles/ordering live in a JSON sidecar file maintained by
//! [`store::GalleryStore`].
//!
//! ## Registered routes
//!
//! * **`GET /api/carousel`** — list all images ordered for display; every
//!   call reconciles the sidecar against the directory contents first.
//! * **`POST /api/carousel`** — multipart upload (`image` field plus
//!   optional `title`/`caption` text fields); the new image is appended at
//!   the end of the order.
//! * **`PUT /api/carousel/{id}`** — patch caption, title and/or order of one
//!   image; order input is clamped to `[1, N]`.
//! * **`POST /api/carousel/reorder`** — bulk resequencing from an array of
//!   ids; omitted images keep their relative order after the listed ones.
//! * **`DELETE /api/carousel/{id}`** — delete the image file and its
//!   metadata entry.

use actix_web::{web, Scope};

mod delete;
mod list;
mod reorder;
mod update;
mod upload;

pub mod store;

const API_PATH: &str = "/api/carousel";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("", web::get().to(list::process))
        .route("", web::post().to(upload::process))
        .route("/reorder", web::post().to(reorder::process))
        .route("/{id}", web::put().to(update::process))
        .route("/{id}", web::delete().to(delete::process))
}

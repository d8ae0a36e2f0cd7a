//! # Events service
//!
//! CRUD for society events plus the attendee-registration sub-resource.
//! Create and update accept `multipart/form-data` with an optional `image`
//! file part; the record owns that file (a replacement upload deletes the
//! previous one best-effort, deleting the event deletes it too).
//!
//! ## Registered routes
//!
//! * **`GET /api/events`** — all events, newest event date first.
//! * **`GET /api/events/{id}`** — one event.
//! * **`POST /api/events`** — create (multipart, optional image).
//! * **`PUT /api/events/{id}`** — update provided fields (multipart).
//! * **`DELETE /api/events/{id}`** — delete record and owned image.
//! * **`POST /api/events/{id}/register`** — public attendee registration;
//!   copies the event title into the registration record.
//! * **`GET /api/events/{id}/registrations`** — registrations of one event.
//! * **`GET /api/events/admin/all-registrations`** — every registration,
//!   for the admin dashboard.
//! * **`DELETE /api/events/registrations/{reg_id}`** — drop a registration.

use actix_web::{web, Scope};

mod delete;
mod get;
mod registrations;
mod save;

const API_PATH: &str = "/api/events";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("/admin/all-registrations", web::get().to(registrations::all))
        .route(
            "/registrations/{reg_id}",
            web::delete().to(registrations::remove),
        )
        .route("", web::get().to(get::list))
        .route("", web::post().to(save::create))
        .route("/{id}", web::get().to(get::process))
        .route("/{id}", web::put().to(save::update))
        .route("/{id}", web::delete().to(delete::process))
        .route("/{id}/register", web::post().to(registrations::register))
        .route(
            "/{id}/registrations",
            web::get().to(registrations::for_event),
        )
}

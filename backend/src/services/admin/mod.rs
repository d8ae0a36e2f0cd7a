//! # Admin service
//!
//! Session lifecycle for the single admin principal and the contact-message
//! inbox.
//!
//! ## Registered routes
//!
//! * **`POST /api/admin/login`** — verify credentials, open a session, set
//!   the `sid` cookie.
//! * **`POST /api/admin/logout`** — destroy the session, clear the cookie.
//! * **`GET /api/admin/me`** — report whether the request carries a valid
//!   session; the dashboard uses this to gate its mutating UI.
//! * **`GET /api/admin/messages`** — inbox, newest first.
//! * **`POST /api/admin/messages`** — public contact-form submission.
//! * **`DELETE /api/admin/messages/{id}`** — drop a message.

use actix_web::{web, Scope};

mod auth;
mod messages;

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    web::scope(API_PATH)
        .route("/messages", web::get().to(messages::list))
        .route("/messages", web::post().to(messages::create))
        .route("/messages/{id}", web::delete().to(messages::remove))
        .route("/login", web::post().to(auth::login))
        .route("/logout", web::post().to(auth::logout))
        .route("/me", web::get().to(auth::me))
}

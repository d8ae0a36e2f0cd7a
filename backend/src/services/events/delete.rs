use actix_web::{web, HttpResponse};
use rusqlite::params;
use serde_json::json;

use crate::config::Config;
use crate::error::ApiError;
use crate::services::events::get::fetch_event;
use crate::{db, files};

/// `DELETE /api/events/{id}`: drop the record and best-effort delete its
/// image. Deleting an unknown id still acknowledges, as the original did.
pub async fn process(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    if let Ok(event) = fetch_event(&conn, &path) {
        files::delete_public_file(&cfg.public_dir, &event.image);
    }
    conn.execute("DELETE FROM events WHERE id = ?1", params![path.as_str()])?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

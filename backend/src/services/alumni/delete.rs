use actix_web::{web, HttpResponse};
use rusqlite::params;
use serde_json::json;

use crate::config::Config;
use crate::error::ApiError;
use crate::services::alumni::get::fetch_alumni;
use crate::{db, files};

/// `DELETE /api/alumni/{id}`: drop the record and best-effort its avatar.
pub async fn process(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    if let Ok(entry) = fetch_alumni(&conn, &path) {
        files::delete_public_file(&cfg.public_dir, &entry.avatar_url);
    }
    conn.execute("DELETE FROM alumni WHERE id = ?1", params![path.as_str()])?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

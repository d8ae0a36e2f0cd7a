use actix_web::{web, HttpResponse};
use rusqlite::params;
use serde_json::json;

use crate::config::Config;
use crate::error::ApiError;
use crate::services::projects::get::fetch_project;
use crate::{db, files};

/// `DELETE /api/projects/{id}`: drop the record and best-effort its image.
pub async fn process(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    if let Ok(project) = fetch_project(&conn, &path) {
        files::delete_public_file(&cfg.public_dir, &project.image);
    }
    conn.execute("DELETE FROM projects WHERE id = ?1", params![path.as_str()])?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

use actix_web::{web, HttpResponse};
use rusqlite::params;
use serde_json::json;

use crate::config::Config;
use crate::error::ApiError;
use crate::services::blogs::get::fetch_blog;
use crate::{db, files};

/// `DELETE /api/blogs/{id}`: drop the record and best-effort its image.
pub async fn process(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    if let Ok(blog) = fetch_blog(&conn, &path) {
        files::delete_public_file(&cfg.public_dir, &blog.image);
    }
    conn.execute("DELETE FROM blogs WHERE id = ?1", params![path.as_str()])?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection, OptionalExtension, Row};

use common::model::alumni::Alumni;

use crate::config::Config;
use crate::db;
use crate::error::ApiError;

pub(crate) const ALUMNI_COLUMNS: &str = "id, fullname, batch, department, current_position, \
     company, bio, email, phone, linkedin, facebook, avatar_url, created_at";

pub(crate) fn map_alumni(row: &Row) -> rusqlite::Result<Alumni> {
    Ok(Alumni {
        id: row.get(0)?,
        fullname: row.get(1)?,
        batch: row.get(2)?,
        department: row.get(3)?,
        current_position: row.get(4)?,
        company: row.get(5)?,
        bio: row.get(6)?,
        email: row.get(7)?,
        phone: row.get(8)?,
        linkedin: row.get(9)?,
        facebook: row.get(10)?,
        avatar_url: row.get(11)?,
        created_at: db::parse_ts(&row.get::<_, String>(12)?),
    })
}

pub(crate) fn fetch_alumni(conn: &Connection, id: &str) -> Result<Alumni, ApiError> {
    conn.query_row(
        &format!("SELECT {ALUMNI_COLUMNS} FROM alumni WHERE id = ?1"),
        params![id],
        map_alumni,
    )
    .optional()?
    .ok_or_else(|| ApiError::NotFound("Alumni not found".to_string()))
}

/// `GET /api/alumni`: newest entry first.
pub async fn list(cfg: web::Data<Config>) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {ALUMNI_COLUMNS} FROM alumni ORDER BY created_at DESC"
    ))?;
    let alumni: Vec<Alumni> = stmt
        .query_map([], map_alumni)?
        .collect::<rusqlite::Result<_>>()?;
    Ok(HttpResponse::Ok().json(alumni))
}

/// `GET /api/alumni/{id}`.
pub async fn process(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let entry = fetch_alumni(&conn, &path)?;
    Ok(HttpResponse::Ok().json(entry))
}

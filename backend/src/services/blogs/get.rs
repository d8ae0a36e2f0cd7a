use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection, OptionalExtension, Row};

use common::model::blog::Blog;

use crate::config::Config;
use crate::db;
use crate::error::ApiError;

pub(crate) const BLOG_COLUMNS: &str =
    "id, title, description, content, author, image, date, post_time, read_time";

pub(crate) fn map_blog(row: &Row) -> rusqlite::Result<Blog> {
    Ok(Blog {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        content: row.get(3)?,
        author: row.get(4)?,
        image: row.get(5)?,
        date: db::parse_ts(&row.get::<_, String>(6)?),
        post_time: db::parse_ts(&row.get::<_, String>(7)?),
        read_time: row.get(8)?,
    })
}

pub(crate) fn fetch_blog(conn: &Connection, id: &str) -> Result<Blog, ApiError> {
    conn.query_row(
        &format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = ?1"),
        params![id],
        map_blog,
    )
    .optional()?
    .ok_or_else(|| ApiError::NotFound("Blog not found".to_string()))
}

/// `GET /api/blogs`: newest post first.
pub async fn list(cfg: web::Data<Config>) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {BLOG_COLUMNS} FROM blogs ORDER BY post_time DESC"
    ))?;
    let blogs: Vec<Blog> = stmt
        .query_map([], map_blog)?
        .collect::<rusqlite::Result<_>>()?;
    Ok(HttpResponse::Ok().json(blogs))
}

/// `GET /api/blogs/{id}`.
pub async fn process(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let blog = fetch_blog(&conn, &path)?;
    Ok(HttpResponse::Ok().json(blog))
}

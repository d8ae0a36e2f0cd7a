use actix_web::{web, HttpResponse};
use rusqlite::{params, Connection, OptionalExtension, Row};

use common::model::event::Event;

use crate::config::Config;
use crate::db;
use crate::error::ApiError;

pub(crate) const EVENT_COLUMNS: &str = "id, title, description, date, time, location, attendees, \
     type, status, image, image_url, registration_link, created_at";

pub(crate) fn map_event(row: &Row) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        date: db::parse_ts(&row.get::<_, String>(3)?),
        time: row.get(4)?,
        location: row.get(5)?,
        attendees: row.get(6)?,
        event_type: row.get(7)?,
        status: row.get(8)?,
        image: row.get(9)?,
        image_url: row.get(10)?,
        registration_link: row.get(11)?,
        created_at: db::parse_ts(&row.get::<_, String>(12)?),
    })
}

pub(crate) fn fetch_event(conn: &Connection, id: &str) -> Result<Event, ApiError> {
    conn.query_row(
        &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1"),
        params![id],
        map_event,
    )
    .optional()?
    .ok_or_else(|| ApiError::NotFound("Event not found".to_string()))
}

/// `GET /api/events`: newest event date first.
pub async fn list(cfg: web::Data<Config>) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {EVENT_COLUMNS} FROM events ORDER BY date DESC"
    ))?;
    let events: Vec<Event> = stmt
        .query_map([], map_event)?
        .collect::<rusqlite::Result<_>>()?;
    Ok(HttpResponse::Ok().json(events))
}

/// `GET /api/events/{id}`.
pub async fn process(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let event = fetch_event(&conn, &path)?;
    Ok(HttpResponse::Ok().json(event))
}

//! Attendee registrations, a sub-resource of events.
//!
//! The event title is copied into each registration at creation time so the
//! admin list survives event deletion; there is no foreign-key relationship.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use rusqlite::{params, Row};
use serde_json::json;
use uuid::Uuid;

use common::model::registration::EventRegistration;
use common::requests::RegistrationRequest;

use crate::config::Config;
use crate::db;
use crate::error::ApiError;
use crate::services::events::get::fetch_event;

const REGISTRATION_COLUMNS: &str = "id, event_id, event_title, full_name, email, phone, \
     student_id, department, batch, section, message, created_at";

fn map_registration(row: &Row) -> rusqlite::Result<EventRegistration> {
    Ok(EventRegistration {
        id: row.get(0)?,
        event_id: row.get(1)?,
        event_title: row.get(2)?,
        full_name: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
        student_id: row.get(6)?,
        department: row.get(7)?,
        batch: row.get(8)?,
        section: row.get(9)?,
        message: row.get(10)?,
        created_at: db::parse_ts(&row.get::<_, String>(11)?),
    })
}

/// `POST /api/events/{id}/register`.
pub async fn register(
    cfg: web::Data<Config>,
    path: web::Path<String>,
    body: web::Json<RegistrationRequest>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let event = fetch_event(&conn, &path)?;

    let registration = EventRegistration {
        id: Uuid::new_v4().to_string(),
        event_id: event.id,
        event_title: event.title,
        full_name: body.full_name.clone(),
        email: body.email.clone(),
        phone: body.phone.clone(),
        student_id: body.student_id.clone(),
        department: body.department.clone(),
        batch: body.batch.clone(),
        section: body.section.clone(),
        message: body.message.clone(),
        created_at: Utc::now(),
    };
    conn.execute(
        "INSERT INTO event_registrations (id, event_id, event_title, full_name, email, phone, \
         student_id, department, batch, section, message, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            registration.id,
            registration.event_id,
            registration.event_title,
            registration.full_name,
            registration.email,
            registration.phone,
            registration.student_id,
            registration.department,
            registration.batch,
            registration.section,
            registration.message,
            db::ts(&registration.created_at),
        ],
    )?;
    Ok(HttpResponse::Ok().json(registration))
}

/// `GET /api/events/{id}/registrations`: newest first.
pub async fn for_event(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {REGISTRATION_COLUMNS} FROM event_registrations \
         WHERE event_id = ?1 ORDER BY created_at DESC"
    ))?;
    let registrations: Vec<EventRegistration> = stmt
        .query_map(params![path.as_str()], map_registration)?
        .collect::<rusqlite::Result<_>>()?;
    Ok(HttpResponse::Ok().json(registrations))
}

/// `GET /api/events/admin/all-registrations`: the admin dashboard view.
pub async fn all(cfg: web::Data<Config>) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {REGISTRATION_COLUMNS} FROM event_registrations ORDER BY created_at DESC"
    ))?;
    let registrations: Vec<EventRegistration> = stmt
        .query_map([], map_registration)?
        .collect::<rusqlite::Result<_>>()?;
    Ok(HttpResponse::Ok().json(registrations))
}

/// `DELETE /api/events/registrations/{reg_id}`.
pub async fn remove(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    conn.execute(
        "DELETE FROM event_registrations WHERE id = ?1",
        params![path.as_str()],
    )?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use rusqlite::{params, Connection};
use uuid::Uuid;

use common::model::event::Event;

use crate::config::Config;
use crate::error::ApiError;
use crate::forms::SubmittedForm;
use crate::services::events::get::fetch_event;
use crate::{db, files, forms};

/// `POST /api/events`: create from a multipart form, optional `image` part.
pub async fn create(
    cfg: web::Data<Config>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "image", &cfg.uploads_dir()).await?;
    let conn = db::open(&cfg)?;
    let event = insert_event(&conn, &form)?;
    Ok(HttpResponse::Ok().json(event))
}

fn insert_event(conn: &Connection, form: &SubmittedForm) -> Result<Event, ApiError> {
    let now = Utc::now();
    let event = Event {
        id: Uuid::new_v4().to_string(),
        title: form.text("title"),
        description: form.text("description"),
        date: form.date("date").unwrap_or(now),
        time: form.text("time"),
        location: form.text("location"),
        attendees: form.int("attendees").unwrap_or(0),
        event_type: form.text("type"),
        status: form.text("status"),
        image: form
            .file
            .as_ref()
            .map(|f| f.web_path.clone())
            .unwrap_or_default(),
        image_url: form.text("image_url"),
        registration_link: form.text("registration_link"),
        created_at: now,
    };
    conn.execute(
        "INSERT INTO events (id, title, description, date, time, location, attendees, type, \
         status, image, image_url, registration_link, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            event.id,
            event.title,
            event.description,
            db::ts(&event.date),
            event.time,
            event.location,
            event.attendees,
            event.event_type,
            event.status,
            event.image,
            event.image_url,
            event.registration_link,
            db::ts(&event.created_at),
        ],
    )?;
    Ok(event)
}

/// `PUT /api/events/{id}`: overwrite only the submitted fields; a new image
/// replaces (and best-effort deletes) the previous one.
pub async fn update(
    cfg: web::Data<Config>,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "image", &cfg.uploads_dir()).await?;
    let conn = db::open(&cfg)?;
    let mut event = fetch_event(&conn, &path)?;

    if let Some(v) = form.value("title") {
        event.title = v.to_string();
    }
    if let Some(v) = form.value("description") {
        event.description = v.to_string();
    }
    if let Some(d) = form.date("date") {
        event.date = d;
    }
    if let Some(v) = form.value("time") {
        event.time = v.to_string();
    }
    if let Some(v) = form.value("location") {
        event.location = v.to_string();
    }
    if let Some(n) = form.int("attendees") {
        event.attendees = n;
    }
    if let Some(v) = form.value("type") {
        event.event_type = v.to_string();
    }
    if let Some(v) = form.value("status") {
        event.status = v.to_string();
    }
    if let Some(v) = form.value("image_url") {
        event.image_url = v.to_string();
    }
    if let Some(v) = form.value("registration_link") {
        event.registration_link = v.to_string();
    }
    if let Some(new_image) =
        files::replace_owned_file(&cfg.public_dir, &event.image, form.file.as_ref())
    {
        event.image = new_image;
    }

    conn.execute(
        "UPDATE events SET title = ?2, description = ?3, date = ?4, time = ?5, location = ?6, \
         attendees = ?7, type = ?8, status = ?9, image = ?10, image_url = ?11, \
         registration_link = ?12 WHERE id = ?1",
        params![
            event.id,
            event.title,
            event.description,
            db::ts(&event.date),
            event.time,
            event.location,
            event.attendees,
            event.event_type,
            event.status,
            event.image,
            event.image_url,
            event.registration_link,
        ],
    )?;
    Ok(HttpResponse::Ok().json(event))
}

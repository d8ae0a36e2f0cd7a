use actix_web::{web, HttpResponse};
use chrono::Utc;
use rusqlite::{params, Row};
use serde_json::json;
use uuid::Uuid;

use common::model::message::Message;
use common::requests::MessageRequest;

use crate::config::Config;
use crate::db;
use crate::error::ApiError;

fn map_message(row: &Row) -> rusqlite::Result<Message> {
    Ok(Message {
        id: row.get(0)?,
        full_name: row.get(1)?,
        email: row.get(2)?,
        subject: row.get(3)?,
        message: row.get(4)?,
        created_at: db::parse_ts(&row.get::<_, String>(5)?),
    })
}

/// `GET /api/admin/messages`: newest first.
pub async fn list(cfg: web::Data<Config>) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let mut stmt = conn.prepare(
        "SELECT id, full_name, email, subject, message, created_at \
         FROM messages ORDER BY created_at DESC",
    )?;
    let messages: Vec<Message> = stmt
        .query_map([], map_message)?
        .collect::<rusqlite::Result<_>>()?;
    Ok(HttpResponse::Ok().json(messages))
}

/// `POST /api/admin/messages`: the public contact form.
pub async fn create(
    cfg: web::Data<Config>,
    body: web::Json<MessageRequest>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let msg = Message {
        id: Uuid::new_v4().to_string(),
        full_name: body.sender(),
        email: body.email.clone(),
        subject: body.subject.clone(),
        message: body.message.clone(),
        created_at: Utc::now(),
    };
    conn.execute(
        "INSERT INTO messages (id, full_name, email, subject, message, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            msg.id,
            msg.full_name,
            msg.email,
            msg.subject,
            msg.message,
            db::ts(&msg.created_at),
        ],
    )?;
    Ok(HttpResponse::Ok().json(msg))
}

/// `DELETE /api/admin/messages/{id}`.
pub async fn remove(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    conn.execute("DELETE FROM messages WHERE id = ?1", params![path.as_str()])?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use rusqlite::params;
use uuid::Uuid;

use common::model::alumni::Alumni;

use crate::config::Config;
use crate::error::ApiError;
use crate::services::alumni::get::fetch_alumni;
use crate::{db, files, forms};

/// `POST /api/alumni`: create; the optional upload field is `avatar`.
pub async fn create(
    cfg: web::Data<Config>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "avatar", &cfg.uploads_dir()).await?;
    let conn = db::open(&cfg)?;

    let entry = Alumni {
        id: Uuid::new_v4().to_string(),
        fullname: form.text("fullname"),
        batch: form.text("batch"),
        department: form.text("department"),
        current_position: form.text("current_position"),
        company: form.text("company"),
        bio: form.text("bio"),
        email: form.text("email"),
        phone: form.text("phone"),
        linkedin: form.text("linkedin"),
        facebook: form.text("facebook"),
        avatar_url: form
            .file
            .as_ref()
            .map(|f| f.web_path.clone())
            .unwrap_or_default(),
        created_at: Utc::now(),
    };
    conn.execute(
        "INSERT INTO alumni (id, fullname, batch, department, current_position, company, bio, \
         email, phone, linkedin, facebook, avatar_url, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            entry.id,
            entry.fullname,
            entry.batch,
            entry.department,
            entry.current_position,
            entry.company,
            entry.bio,
            entry.email,
            entry.phone,
            entry.linkedin,
            entry.facebook,
            entry.avatar_url,
            db::ts(&entry.created_at),
        ],
    )?;
    Ok(HttpResponse::Ok().json(entry))
}

/// `PUT /api/alumni/{id}`: overwrite only the submitted fields; a new avatar
/// replaces (and best-effort deletes) the previous one.
pub async fn update(
    cfg: web::Data<Config>,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "avatar", &cfg.uploads_dir()).await?;
    let conn = db::open(&cfg)?;
    let mut entry = fetch_alumni(&conn, &path)?;

    if let Some(v) = form.value("fullname") {
        entry.fullname = v.to_string();
    }
    if let Some(v) = form.value("batch") {
        entry.batch = v.to_string();
    }
    if let Some(v) = form.value("department") {
        entry.department = v.to_string();
    }
    if let Some(v) = form.value("current_position") {
        entry.current_position = v.to_string();
    }
    if let Some(v) = form.value("company") {
        entry.company = v.to_string();
    }
    if let Some(v) = form.value("bio") {
        entry.bio = v.to_string();
    }
    if let Some(v) = form.value("email") {
        entry.email = v.to_string();
    }
    if let Some(v) = form.value("phone") {
        entry.phone = v.to_string();
    }
    if let Some(v) = form.value("linkedin") {
        entry.linkedin = v.to_string();
    }
    if let Some(v) = form.value("facebook") {
        entry.facebook = v.to_string();
    }
    if let Some(new_avatar) =
        files::replace_owned_file(&cfg.public_dir, &entry.avatar_url, form.file.as_ref())
    {
        entry.avatar_url = new_avatar;
    }

    conn.execute(
        "UPDATE alumni SET fullname = ?2, batch = ?3, department = ?4, current_position = ?5, \
         company = ?6, bio = ?7, email = ?8, phone = ?9, linkedin = ?10, facebook = ?11, \
         avatar_url = ?12 WHERE id = ?1",
        params![
            entry.id,
            entry.fullname,
            entry.batch,
            entry.department,
            entry.current_position,
            entry.company,
            entry.bio,
            entry.email,
            entry.phone,
            entry.linkedin,
            entry.facebook,
            entry.avatar_url,
        ],
    )?;
    Ok(HttpResponse::Ok().json(entry))
}

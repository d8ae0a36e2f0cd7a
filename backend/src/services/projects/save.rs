use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use rusqlite::params;
use uuid::Uuid;

use common::model::project::Project;

use crate::config::Config;
use crate::error::ApiError;
use crate::services::projects::get::fetch_project;
use crate::{db, files, forms};

fn encode_list(list: &[String]) -> String {
    serde_json::to_string(list).unwrap_or_else(|_| "[]".to_string())
}

/// `POST /api/projects`: create (multipart, optional `image`).
pub async fn create(
    cfg: web::Data<Config>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "image", &cfg.uploads_dir()).await?;
    let conn = db::open(&cfg)?;

    let project = Project {
        id: Uuid::new_v4().to_string(),
        title: form.text("title"),
        description: form.text("description"),
        category: form.text("category"),
        status: form.text("status"),
        stars: form.int("stars").unwrap_or(0),
        team: form.text("team"),
        technologies: form.list("technologies").unwrap_or_default(),
        team_members: form.list("team_members").unwrap_or_default(),
        image: form
            .file
            .as_ref()
            .map(|f| f.web_path.clone())
            .unwrap_or_default(),
        content: form.text("content"),
        github_url: form.text("github_url"),
        demo_url: form.text("demo_url"),
        created_at: Utc::now(),
    };
    conn.execute(
        "INSERT INTO projects (id, title, description, category, status, stars, team, \
         technologies, team_members, image, content, github_url, demo_url, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            project.id,
            project.title,
            project.description,
            project.category,
            project.status,
            project.stars,
            project.team,
            encode_list(&project.technologies),
            encode_list(&project.team_members),
            project.image,
            project.content,
            project.github_url,
            project.demo_url,
            db::ts(&project.created_at),
        ],
    )?;
    Ok(HttpResponse::Ok().json(project))
}

/// `PUT /api/projects/{id}`: overwrite only the submitted fields; list
/// fields are renormalized when present.
pub async fn update(
    cfg: web::Data<Config>,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "image", &cfg.uploads_dir()).await?;
    let conn = db::open(&cfg)?;
    let mut project = fetch_project(&conn, &path)?;

    if let Some(v) = form.value("title") {
        project.title = v.to_string();
    }
    if let Some(v) = form.value("description") {
        project.description = v.to_string();
    }
    if let Some(v) = form.value("category") {
        project.category = v.to_string();
    }
    if let Some(v) = form.value("status") {
        project.status = v.to_string();
    }
    if form.value("stars").is_some() {
        project.stars = form.int("stars").unwrap_or(0);
    }
    if let Some(v) = form.value("team") {
        project.team = v.to_string();
    }
    if let Some(list) = form.list("technologies") {
        project.technologies = list;
    }
    if let Some(list) = form.list("team_members") {
        project.team_members = list;
    }
    if let Some(v) = form.value("content") {
        project.content = v.to_string();
    }
    if let Some(v) = form.value("github_url") {
        project.github_url = v.to_string();
    }
    if let Some(v) = form.value("demo_url") {
        project.demo_url = v.to_string();
    }
    if let Some(new_image) =
        files::replace_owned_file(&cfg.public_dir, &project.image, form.file.as_ref())
    {
        project.image = new_image;
    }

    conn.execute(
        "UPDATE projects SET title = ?2, description = ?3, category = ?4, status = ?5, \
         stars = ?6, team = ?7, technologies = ?8, team_members = ?9, image = ?10, \
         content = ?11, github_url = ?12, demo_url = ?13 WHERE id = ?1",
        params![
            project.id,
            project.title,
            project.description,
            project.category,
            project.status,
            project.stars,
            project.team,
            encode_list(&project.technologies),
            encode_list(&project.team_members),
            project.image,
            project.content,
            project.github_url,
            project.demo_url,
        ],
    )?;
    Ok(HttpResponse::Ok().json(project))
}

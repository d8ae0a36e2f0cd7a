use actix_web::{web, HttpResponse};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension, Row};

use common::model::project::Project;

use crate::config::Config;
use crate::db;
use crate::error::ApiError;

pub(crate) const PROJECT_COLUMNS: &str = "id, title, description, category, status, stars, team, \
     technologies, team_members, image, content, github_url, demo_url, created_at";

/// List columns are stored as JSON arrays; a hand-edited row that fails to
/// parse degrades to an empty list.
pub(crate) fn parse_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        warn!("unparseable list column {raw:?}: {err}");
        Vec::new()
    })
}

pub(crate) fn map_project(row: &Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        status: row.get(4)?,
        stars: row.get(5)?,
        team: row.get(6)?,
        technologies: parse_list(&row.get::<_, String>(7)?),
        team_members: parse_list(&row.get::<_, String>(8)?),
        image: row.get(9)?,
        content: row.get(10)?,
        github_url: row.get(11)?,
        demo_url: row.get(12)?,
        created_at: db::parse_ts(&row.get::<_, String>(13)?),
    })
}

pub(crate) fn fetch_project(conn: &Connection, id: &str) -> Result<Project, ApiError> {
    conn.query_row(
        &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?1"),
        params![id],
        map_project,
    )
    .optional()?
    .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))
}

/// `GET /api/projects`: newest first.
pub async fn list(cfg: web::Data<Config>) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {PROJECT_COLUMNS} FROM projects ORDER BY created_at DESC"
    ))?;
    let projects: Vec<Project> = stmt
        .query_map([], map_project)?
        .collect::<rusqlite::Result<_>>()?;
    Ok(HttpResponse::Ok().json(projects))
}

/// `GET /api/projects/{id}`.
pub async fn process(
    cfg: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let conn = db::open(&cfg)?;
    let project = fetch_project(&conn, &path)?;
    Ok(HttpResponse::Ok().json(project))
}

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use rusqlite::params;
use uuid::Uuid;

use common::model::blog::Blog;

use crate::config::Config;
use crate::error::ApiError;
use crate::services::blogs::get::fetch_blog;
use crate::{db, files, forms};

/// `POST /api/blogs`: create; `author` defaults to "Anonymous".
pub async fn create(
    cfg: web::Data<Config>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "image", &cfg.uploads_dir()).await?;
    let conn = db::open(&cfg)?;

    let now = Utc::now();
    let blog = Blog {
        id: Uuid::new_v4().to_string(),
        title: form.text("title"),
        description: form.text("description"),
        content: form.text("content"),
        author: form
            .value("author")
            .filter(|a| !a.is_empty())
            .unwrap_or("Anonymous")
            .to_string(),
        image: form
            .file
            .as_ref()
            .map(|f| f.web_path.clone())
            .unwrap_or_default(),
        date: now,
        post_time: now,
        read_time: form.text("readTime"),
    };
    conn.execute(
        "INSERT INTO blogs (id, title, description, content, author, image, date, post_time, read_time) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            blog.id,
            blog.title,
            blog.description,
            blog.content,
            blog.author,
            blog.image,
            db::ts(&blog.date),
            db::ts(&blog.post_time),
            blog.read_time,
        ],
    )?;
    Ok(HttpResponse::Ok().json(blog))
}

/// `PUT /api/blogs/{id}`: overwrite only the submitted fields.
pub async fn update(
    cfg: web::Data<Config>,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "image", &cfg.uploads_dir()).await?;
    let conn = db::open(&cfg)?;
    let mut blog = fetch_blog(&conn, &path)?;

    if let Some(v) = form.value("title") {
        blog.title = v.to_string();
    }
    if let Some(v) = form.value("description") {
        blog.description = v.to_string();
    }
    if let Some(v) = form.value("content") {
        blog.content = v.to_string();
    }
    if let Some(v) = form.value("author") {
        blog.author = v.to_string();
    }
    if let Some(v) = form.value("readTime") {
        blog.read_time = v.to_string();
    }
    if let Some(new_image) =
        files::replace_owned_file(&cfg.public_dir, &blog.image, form.file.as_ref())
    {
        blog.image = new_image;
    }

    conn.execute(
        "UPDATE blogs SET title = ?2, description = ?3, content = ?4, author = ?5, image = ?6, \
         read_time = ?7 WHERE id = ?1",
        params![
            blog.id,
            blog.title,
            blog.description,
            blog.content,
            blog.author,
            blog.image,
            blog.read_time,
        ],
    )?;
    Ok(HttpResponse::Ok().json(blog))
}

use std::fs;

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};

use crate::config::Config;
use crate::error::ApiError;
use crate::forms;
use crate::services::carousel::store::GalleryStore;

/// `POST /api/carousel`: multipart image upload.
///
/// The file is first written to the uploads area under its generated name,
/// then moved into the gallery directory so the name doubles as the gallery
/// id. A missing or extension-rejected file is a validation error.
pub async fn process(
    cfg: web::Data<Config>,
    store: web::Data<GalleryStore>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let form = forms::read_form(payload, "image", &cfg.uploads_dir()).await?;
    let file = form
        .file
        .as_ref()
        .ok_or_else(|| ApiError::Validation("No file uploaded".to_string()))?;

    fs::rename(&file.disk_path, store.dir().join(&file.name))?;

    let entry = store.add(
        &file.name,
        form.value("title").unwrap_or_default(),
        form.value("caption").unwrap_or_default(),
    );
    Ok(HttpResponse::Ok().json(entry.to_public()))
}

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::ApiError;
use crate::services::carousel::store::GalleryStore;

/// `DELETE /api/carousel/{id}`: remove the file and its metadata entry.
///
/// A failed file deletion surfaces as a 500 and leaves the metadata alone.
pub async fn process(
    store: web::Data<GalleryStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    store.remove(&path)?;
    Ok(HttpResponse::Ok().json(json!({ "ok": true })))
}

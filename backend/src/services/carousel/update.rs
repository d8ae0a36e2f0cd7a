use actix_web::{web, HttpResponse};

use common::requests::GalleryMetaPatch;

use crate::error::ApiError;
use crate::services::carousel::store::GalleryStore;

/// `PUT /api/carousel/{id}`: patch caption, title and/or order.
pub async fn process(
    store: web::Data<GalleryStore>,
    path: web::Path<String>,
    body: web::Json<GalleryMetaPatch>,
) -> Result<HttpResponse, ApiError> {
    let entry = store.update_entry(&path, &body)?;
    Ok(HttpResponse::Ok().json(entry.to_public()))
}
